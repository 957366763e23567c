use egui::Ui;
use rust_decimal::Decimal;

use crate::app::SalaryApp;
use crate::utils::format_rupees;
use crate::widgets::rupee_field;

pub struct BreakdownScreen;

impl BreakdownScreen {
    /// Consistent group width for all sections
    const GROUP_WIDTH: f32 = 560.0;
    /// Label column width in the results grids
    const LABEL_WIDTH: f32 = 280.0;

    pub fn show(app: &mut SalaryApp, ui: &mut Ui) {
        ui.heading("India Salary & Tax Calculator");
        ui.label("FY 2025-26, New Regime");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let group_width = ui.available_width().min(Self::GROUP_WIDTH);

            // CTC input
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Enter Annual CTC");
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        let response = rupee_field(ui, "Annual CTC:", &mut app.form.annual_ctc);
                        if response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            app.calculate();
                        }

                        if ui.button("Calculate Tax").clicked() {
                            app.calculate();
                        }

                        if ui.button("Clear").clicked() {
                            app.form = crate::app::CtcForm::new();
                            app.breakdown = None;
                            app.clear_message();
                        }
                    });
                });
            });

            ui.add_space(10.0);

            // Quick-set buttons
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Quick Set CTC");
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        for (label, lakhs) in [("10 LPA", 10), ("20 LPA", 20), ("50 LPA", 50)] {
                            if ui.button(label).clicked() {
                                app.set_ctc_lakhs(lakhs);
                            }
                        }
                    });
                });
            });

            ui.add_space(10.0);

            // Adjust buttons
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Adjust Current CTC");
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        for (label, lakhs) in
                            [("+5 LPA", 5), ("+2 LPA", 2), ("-2 LPA", -2), ("-5 LPA", -5)]
                        {
                            if ui.button(label).clicked() {
                                app.adjust_ctc_lakhs(lakhs);
                            }
                        }
                    });
                });
            });

            // Validation errors
            if !app.form.errors.is_empty() {
                ui.add_space(10.0);
                ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                    ui.group(|ui| {
                        ui.set_min_width(group_width - 20.0);
                        ui.colored_label(egui::Color32::RED, "Input Errors:");
                        for error in &app.form.errors {
                            ui.colored_label(egui::Color32::RED, format!("  • {error}"));
                        }
                    });
                });
            }

            // Results
            if let Some(breakdown) = &app.breakdown {
                ui.add_space(20.0);
                ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                    ui.group(|ui| {
                        ui.set_min_width(group_width - 20.0);
                        ui.heading("Annual Breakdown (FY 2025-26, New Regime)");
                        ui.add_space(5.0);
                        Self::amount_grid(ui, "annual_grid", &breakdown.annual_rows());

                        ui.add_space(10.0);
                        ui.separator();
                        ui.add_space(5.0);

                        ui.heading("Monthly Breakdown");
                        ui.add_space(5.0);
                        Self::amount_grid(ui, "monthly_grid", &breakdown.monthly_rows());
                    });
                });
            }

            ui.add_space(20.0);
        });
    }

    /// Two-column grid of labeled rupee amounts
    fn amount_grid(ui: &mut Ui, id: &str, rows: &[(&'static str, Decimal)]) {
        egui::Grid::new(id)
            .num_columns(2)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                for (label, amount) in rows {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        ui.set_min_width(Self::LABEL_WIDTH);
                        ui.label(*label);
                    });
                    ui.monospace(format_rupees(*amount));
                    ui.end_row();
                }
            });
    }
}
