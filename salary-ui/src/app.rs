use rust_decimal::Decimal;
use salary_core::{BreakdownCalculator, SalaryBreakdown, TaxRegime};
use tracing::error;

use crate::screens::BreakdownScreen;
use crate::utils::parse_amount;

/// Rupees per lakh, the unit used by the quick-set and adjust buttons.
pub const RUPEES_PER_LAKH: i64 = 100_000;

/// Form state for the single CTC input field.
#[derive(Debug, Clone, Default)]
pub struct CtcForm {
    pub annual_ctc: String,

    // Validation errors
    pub errors: Vec<String>,
}

impl CtcForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the form into a validated CTC amount, recording errors if invalid.
    pub fn validate(&mut self) -> Result<Decimal, ()> {
        self.errors.clear();

        if self.annual_ctc.trim().is_empty() {
            self.errors.push("Annual CTC is required".to_string());
            return Err(());
        }
        let Ok(ctc) = parse_amount(&self.annual_ctc) else {
            self.errors
                .push("Annual CTC must be a valid number".to_string());
            return Err(());
        };
        if ctc <= Decimal::ZERO {
            self.errors
                .push("Annual CTC must be a positive number".to_string());
            return Err(());
        }
        Ok(ctc)
    }

    /// Overwrites the field with a round lakh figure.
    pub fn set_lakhs(&mut self, lakhs: u32) {
        self.annual_ctc =
            (Decimal::from(lakhs) * Decimal::from(RUPEES_PER_LAKH)).to_string();
    }

    /// Shifts the current CTC by a signed number of lakhs, clamping at zero.
    ///
    /// An empty field is treated as zero. If the field holds something
    /// unparseable it is left untouched and an error is returned.
    pub fn adjust_lakhs(&mut self, lakhs: i32) -> Result<(), ()> {
        let Ok(current) = parse_amount(&self.annual_ctc) else {
            return Err(());
        };
        let shifted = current + Decimal::from(lakhs) * Decimal::from(RUPEES_PER_LAKH);
        self.annual_ctc = shifted.max(Decimal::ZERO).to_string();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Main application state.
pub struct SalaryApp {
    pub form: CtcForm,
    pub breakdown: Option<SalaryBreakdown>,
    pub regime: TaxRegime,
    pub status_message: Option<(String, MessageType)>,
}

impl SalaryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn show_message(&mut self, msg: impl Into<String>, msg_type: MessageType) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    /// Validates the form and recomputes the breakdown.
    pub fn calculate(&mut self) {
        match self.form.validate() {
            Ok(ctc) => match BreakdownCalculator::new(&self.regime).calculate(ctc) {
                Ok(breakdown) => {
                    self.breakdown = Some(breakdown);
                    self.show_message("Calculation complete", MessageType::Success);
                }
                Err(e) => {
                    error!(%e, "tax schedule rejected");
                    self.breakdown = None;
                    self.show_message(format!("Calculation failed: {e}"), MessageType::Error);
                }
            },
            Err(()) => {
                self.breakdown = None;
                self.show_message("Please fix the input errors", MessageType::Error);
            }
        }
    }

    /// Quick-set button handler: overwrite the CTC and recalculate.
    pub fn set_ctc_lakhs(&mut self, lakhs: u32) {
        self.form.set_lakhs(lakhs);
        self.calculate();
    }

    /// Adjust button handler: shift the CTC and recalculate.
    pub fn adjust_ctc_lakhs(&mut self, lakhs: i32) {
        match self.form.adjust_lakhs(lakhs) {
            Ok(()) => self.calculate(),
            Err(()) => self.show_message(
                "Current CTC is not a valid number",
                MessageType::Error,
            ),
        }
    }
}

impl Default for SalaryApp {
    fn default() -> Self {
        Self {
            form: CtcForm::new(),
            breakdown: None,
            regime: TaxRegime::fy_2025_26(),
            status_message: None,
        }
    }
}

impl eframe::App for SalaryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Calculation").clicked() {
                        self.form = CtcForm::new();
                        self.breakdown = None;
                        self.clear_message();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, msg_type)) = &self.status_message {
                    let color = match msg_type {
                        MessageType::Info => egui::Color32::GRAY,
                        MessageType::Success => egui::Color32::GREEN,
                        MessageType::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, msg);

                    if ui.small_button("✖").clicked() {
                        self.clear_message();
                    }
                }
            });
        });

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| BreakdownScreen::show(self, ui));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // CtcForm tests
    // =========================================================================

    #[test]
    fn validate_rejects_empty_input() {
        let mut form = CtcForm::new();

        assert_eq!(form.validate(), Err(()));
        assert_eq!(form.errors, vec!["Annual CTC is required".to_string()]);
    }

    #[test]
    fn validate_rejects_non_numeric_input() {
        let mut form = CtcForm {
            annual_ctc: "ten lakh".to_string(),
            ..Default::default()
        };

        assert_eq!(form.validate(), Err(()));
        assert_eq!(
            form.errors,
            vec!["Annual CTC must be a valid number".to_string()]
        );
    }

    #[test]
    fn validate_rejects_zero_and_negative_input() {
        for raw in ["0", "-500000"] {
            let mut form = CtcForm {
                annual_ctc: raw.to_string(),
                ..Default::default()
            };

            assert_eq!(form.validate(), Err(()));
            assert_eq!(
                form.errors,
                vec!["Annual CTC must be a positive number".to_string()]
            );
        }
    }

    #[test]
    fn validate_accepts_comma_grouped_input() {
        let mut form = CtcForm {
            annual_ctc: "12,00,000".to_string(),
            ..Default::default()
        };

        assert_eq!(form.validate(), Ok(dec!(1200000)));
        assert!(form.errors.is_empty());
    }

    #[test]
    fn set_lakhs_writes_round_rupee_figure() {
        let mut form = CtcForm::new();

        form.set_lakhs(10);

        assert_eq!(form.annual_ctc, "1000000");
    }

    #[test]
    fn adjust_lakhs_shifts_current_value() {
        let mut form = CtcForm {
            annual_ctc: "1000000".to_string(),
            ..Default::default()
        };

        assert_eq!(form.adjust_lakhs(5), Ok(()));
        assert_eq!(form.annual_ctc, "1500000");

        assert_eq!(form.adjust_lakhs(-2), Ok(()));
        assert_eq!(form.annual_ctc, "1300000");
    }

    #[test]
    fn adjust_lakhs_treats_empty_field_as_zero() {
        let mut form = CtcForm::new();

        assert_eq!(form.adjust_lakhs(5), Ok(()));
        assert_eq!(form.annual_ctc, "500000");
    }

    #[test]
    fn adjust_lakhs_clamps_at_zero() {
        let mut form = CtcForm {
            annual_ctc: "100000".to_string(),
            ..Default::default()
        };

        assert_eq!(form.adjust_lakhs(-2), Ok(()));
        assert_eq!(form.annual_ctc, "0");
    }

    #[test]
    fn adjust_lakhs_leaves_unparseable_field_untouched() {
        let mut form = CtcForm {
            annual_ctc: "garbage".to_string(),
            ..Default::default()
        };

        assert_eq!(form.adjust_lakhs(5), Err(()));
        assert_eq!(form.annual_ctc, "garbage");
    }

    // =========================================================================
    // SalaryApp tests
    // =========================================================================

    #[test]
    fn calculate_stores_breakdown_on_valid_input() {
        let mut app = SalaryApp::default();
        app.form.annual_ctc = "2000000".to_string();

        app.calculate();

        let breakdown = app.breakdown.expect("breakdown should be computed");
        assert_eq!(breakdown.total_tax_annual, dec!(187907.20));
        assert_eq!(
            app.status_message,
            Some(("Calculation complete".to_string(), MessageType::Success))
        );
    }

    #[test]
    fn calculate_surfaces_validation_errors() {
        let mut app = SalaryApp::default();

        app.calculate();

        assert!(app.breakdown.is_none());
        assert_eq!(
            app.status_message,
            Some(("Please fix the input errors".to_string(), MessageType::Error))
        );
        assert_eq!(app.form.errors, vec!["Annual CTC is required".to_string()]);
    }

    #[test]
    fn quick_set_calculates_immediately() {
        let mut app = SalaryApp::default();

        app.set_ctc_lakhs(10);

        let breakdown = app.breakdown.expect("breakdown should be computed");
        // 10 LPA is fully covered by the rebate.
        assert_eq!(breakdown.total_tax_annual, dec!(0.00));
        assert_eq!(breakdown.net_pay_annual, dec!(978400.00));
    }

    #[test]
    fn adjust_with_unparseable_field_reports_error() {
        let mut app = SalaryApp::default();
        app.form.annual_ctc = "garbage".to_string();

        app.adjust_ctc_lakhs(5);

        assert!(app.breakdown.is_none());
        assert_eq!(
            app.status_message,
            Some((
                "Current CTC is not a valid number".to_string(),
                MessageType::Error
            ))
        );
    }
}
