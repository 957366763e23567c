use egui::{Response, Ui};

/// A reusable rupee input field with label
pub fn rupee_field(ui: &mut Ui, label: &str, value: &mut String) -> Response {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add_space(10.0);
        ui.label("₹");
        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(140.0)
                .hint_text("e.g. 1200000"),
        )
    })
    .inner
}
