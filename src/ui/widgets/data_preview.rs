use crate::data::DataPreview;

pub struct DataPreviewGrid;

impl DataPreviewGrid {
    pub fn show(ui: &mut egui::Ui, preview: &DataPreview) {
        if preview.is_empty() {
            ui.label("No rows to preview");
            return;
        }

        egui::ScrollArea::horizontal().show(ui, |ui| {
            egui::Grid::new("data_preview_grid")
                .striped(true)
                .show(ui, |ui| {
                    // Header
                    for col_name in &preview.columns {
                        ui.strong(col_name.as_str());
                    }
                    ui.end_row();

                    for row in &preview.rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
    }
}
