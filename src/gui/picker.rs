// src/gui/picker.rs
//
// Modal player selection: quick-search box, dropdown, and two terminal
// buttons. Both buttons end the picker; there is no cancel path.

use eframe::egui;

pub enum PickerAction {
    Confirm,
    Everyone,
}

pub fn draw(
    ui: &mut egui::Ui,
    search: &mut String,
    selected: &mut String,
    names: &[String],
) -> Option<PickerAction> {
    let mut action = None;

    ui.label("Quick Search:");
    let resp = ui.add(egui::TextEdit::singleline(search).desired_width(300.0));
    if resp.changed() {
        autofill(search, selected, names);
    }

    ui.add_space(8.0);
    ui.label("Select Player:");
    egui::ComboBox::from_id_salt("player_select")
        .selected_text(selected.as_str())
        .width(300.0)
        .show_ui(ui, |ui| {
            for name in names {
                ui.selectable_value(selected, name.clone(), name);
            }
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            action = Some(PickerAction::Confirm);
        }
        if ui.button("Everyone").clicked() {
            action = Some(PickerAction::Everyone);
        }
    });

    action
}

/// First name containing the typed text, case-insensitive, becomes the
/// selection as the user types. Clearing the box keeps the current
/// selection instead of snapping back to the first name in the list.
fn autofill(search: &str, selected: &mut String, names: &[String]) {
    let typed = search.to_lowercase();
    if typed.is_empty() {
        return;
    }
    if let Some(hit) = names.iter().find(|n| n.to_lowercase().contains(&typed)) {
        *selected = hit.clone();
    }
}
