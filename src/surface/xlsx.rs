//! XLSX rendering of an agenda, reproducing the look of the original
//! spreadsheet: navy title bar, blue table header, shaded italic
//! sub-items, frozen header rows.

use crate::errors::{AppError, AppResult};
use crate::models::item::ScheduledItem;
use crate::surface::Surface;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;

const NAVY: Color = Color::RGB(0x1F4E79);
const BLUE: Color = Color::RGB(0x4A90E2);
const PALE_BLUE: Color = Color::RGB(0xE8F1FF);
const SHADE: Color = Color::RGB(0xF8F9FA);
const GREEN_SHADE: Color = Color::RGB(0xE8F5E8);

const LAST_COL: u16 = 4;
const COL_WIDTHS: [f64; 5] = [42.0, 10.0, 9.0, 17.0, 28.0];

pub struct XlsxSurface {
    ws: Worksheet,
    row: u32,
}

impl XlsxSurface {
    pub fn new() -> AppResult<Self> {
        let mut ws = Worksheet::new();
        ws.set_name("Agenda").map_err(to_app_error)?;
        for (c, w) in COL_WIDTHS.iter().enumerate() {
            ws.set_column_width(c as u16, *w).map_err(to_app_error)?;
        }
        Ok(Self { ws, row: 0 })
    }

    pub fn save(self, path: &Path) -> AppResult<()> {
        let mut workbook = Workbook::new();
        workbook.push_worksheet(self.ws);
        let path_str = path
            .to_str()
            .ok_or_else(|| AppError::Export("invalid path".to_string()))?;
        workbook.save(path_str).map_err(to_app_error)?;
        Ok(())
    }

    fn banner(&mut self, text: &str, fmt: &Format) -> AppResult<()> {
        self.ws
            .merge_range(self.row, 0, self.row, LAST_COL, text, fmt)
            .map_err(to_app_error)?;
        self.row += 1;
        Ok(())
    }
}

impl Surface for XlsxSurface {
    fn title(&mut self, text: &str) -> AppResult<()> {
        let fmt = Format::new()
            .set_bold()
            .set_font_size(18)
            .set_font_color(Color::White)
            .set_background_color(NAVY)
            .set_pattern(FormatPattern::Solid)
            .set_align(FormatAlign::Center);
        self.banner(text, &fmt)
    }

    fn subtitle(&mut self, text: &str) -> AppResult<()> {
        let fmt = Format::new()
            .set_italic()
            .set_font_size(12)
            .set_background_color(PALE_BLUE)
            .set_pattern(FormatPattern::Solid)
            .set_align(FormatAlign::Center);
        self.banner(text, &fmt)?;
        self.row += 1; // spacer
        Ok(())
    }

    fn section(&mut self, text: &str) -> AppResult<()> {
        let fmt = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color(Color::White)
            .set_background_color(BLUE)
            .set_pattern(FormatPattern::Solid);
        self.banner(text, &fmt)
    }

    fn role_row(&mut self, pairs: &[(String, String)]) -> AppResult<()> {
        let label_fmt = Format::new()
            .set_bold()
            .set_background_color(SHADE)
            .set_pattern(FormatPattern::Solid);
        let value_fmt = Format::new()
            .set_background_color(SHADE)
            .set_pattern(FormatPattern::Solid);

        // Roles render two per row across the five columns.
        let mut col = 0u16;
        for (role, assignee) in pairs {
            self.ws
                .write_with_format(self.row, col, role.as_str(), &label_fmt)
                .map_err(to_app_error)?;
            self.ws
                .write_with_format(self.row, col + 1, assignee.as_str(), &value_fmt)
                .map_err(to_app_error)?;
            col += 2;
        }
        self.row += 1;
        Ok(())
    }

    fn table_header(&mut self, headers: &[&str]) -> AppResult<()> {
        self.row += 1; // spacer above the table
        let fmt = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(BLUE)
            .set_pattern(FormatPattern::Solid)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);
        for (c, h) in headers.iter().enumerate() {
            self.ws
                .write_with_format(self.row, c as u16, *h, &fmt)
                .map_err(to_app_error)?;
        }
        self.row += 1;
        self.ws
            .set_freeze_panes(self.row, 0)
            .map_err(to_app_error)?;
        Ok(())
    }

    fn item_row(&mut self, row: &ScheduledItem) -> AppResult<()> {
        let sub = row.item.is_sub_item();
        let mut label_fmt = Format::new().set_border(FormatBorder::Thin);
        let mut cell_fmt = Format::new().set_border(FormatBorder::Thin);
        if sub {
            label_fmt = label_fmt
                .set_italic()
                .set_background_color(SHADE)
                .set_pattern(FormatPattern::Solid);
            cell_fmt = cell_fmt
                .set_background_color(SHADE)
                .set_pattern(FormatPattern::Solid);
        } else {
            label_fmt = label_fmt.set_bold();
        }

        let start = row.start_label();
        let length = row.item.length_label();
        let cells = [
            row.item.label.as_str(),
            start.as_str(),
            length.as_str(),
            row.item.speaker.as_str(),
            row.item.notes.as_str(),
        ];
        for (c, value) in cells.iter().enumerate() {
            let fmt = if c == 0 { &label_fmt } else { &cell_fmt };
            self.ws
                .write_with_format(self.row, c as u16, *value, fmt)
                .map_err(to_app_error)?;
        }
        self.row += 1;
        Ok(())
    }

    fn action_columns(
        &mut self,
        left_title: &str,
        left: &[String],
        right_title: &str,
        right: &[String],
    ) -> AppResult<()> {
        let title_fmt = Format::new()
            .set_bold()
            .set_background_color(GREEN_SHADE)
            .set_pattern(FormatPattern::Solid);
        let step_fmt = Format::new()
            .set_background_color(GREEN_SHADE)
            .set_pattern(FormatPattern::Solid);

        self.ws
            .write_with_format(self.row, 0, left_title, &title_fmt)
            .map_err(to_app_error)?;
        self.ws
            .write_with_format(self.row, 2, right_title, &title_fmt)
            .map_err(to_app_error)?;
        self.row += 1;

        let rows = left.len().max(right.len());
        for i in 0..rows {
            if let Some(step) = left.get(i) {
                self.ws
                    .write_with_format(self.row, 0, step.as_str(), &step_fmt)
                    .map_err(to_app_error)?;
            }
            if let Some(step) = right.get(i) {
                self.ws
                    .write_with_format(self.row, 2, step.as_str(), &step_fmt)
                    .map_err(to_app_error)?;
            }
            self.row += 1;
        }
        Ok(())
    }

    fn footer_row(&mut self, left: &str, right: &str) -> AppResult<()> {
        self.row += 1;
        let fmt = Format::new().set_bold();
        self.ws
            .write_with_format(self.row, 0, left, &fmt)
            .map_err(to_app_error)?;
        self.ws
            .write_with_format(self.row, 2, right, &fmt)
            .map_err(to_app_error)?;
        self.row += 1;
        Ok(())
    }
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
