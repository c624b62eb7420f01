use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::agenda::Agenda;
use crate::surface::{self, XlsxSurface};
use crate::ui::messages::info;
use std::path::Path;

/// Render the full agenda document into a styled workbook.
pub(crate) fn export_xlsx(agenda: &Agenda, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut sheet = XlsxSurface::new()?;
    surface::render(agenda, &mut sheet)?;
    sheet.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}
