//! ANSI terminal rendering of an agenda.

use crate::errors::AppResult;
use crate::models::item::ScheduledItem;
use crate::surface::Surface;
use crate::utils::formatting::{bold, italic};
use crate::utils::table::Table;

enum RowStyle {
    Main,
    Sub,
}

#[derive(Default)]
pub struct TextSurface {
    out: String,
    // Pending item table; flushed on the next non-item element so the
    // column widths can be computed from the whole table.
    table: Option<(Table, Vec<RowStyle>)>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(mut self) -> String {
        self.flush_table();
        self.out
    }

    fn flush_table(&mut self) {
        let Some((table, styles)) = self.table.take() else {
            return;
        };
        let rendered = table.render();
        let mut lines = rendered.lines();

        // Header and separator stay plain; styles apply per data row.
        if let Some(header) = lines.next() {
            self.out.push_str(&bold(header));
            self.out.push('\n');
        }
        if let Some(sep) = lines.next() {
            self.out.push_str(sep);
            self.out.push('\n');
        }
        for (line, style) in lines.zip(&styles) {
            let styled = match style {
                RowStyle::Main => bold(line),
                RowStyle::Sub => italic(line),
            };
            self.out.push_str(&styled);
            self.out.push('\n');
        }
        self.out.push('\n');
    }
}

impl Surface for TextSurface {
    fn title(&mut self, text: &str) -> AppResult<()> {
        self.flush_table();
        self.out.push_str(&bold(text));
        self.out.push('\n');
        Ok(())
    }

    fn subtitle(&mut self, text: &str) -> AppResult<()> {
        self.flush_table();
        self.out.push_str(&italic(text));
        self.out.push_str("\n\n");
        Ok(())
    }

    fn section(&mut self, text: &str) -> AppResult<()> {
        self.flush_table();
        self.out.push_str(&bold(text));
        self.out.push('\n');
        Ok(())
    }

    fn role_row(&mut self, pairs: &[(String, String)]) -> AppResult<()> {
        self.flush_table();
        let cells: Vec<String> = pairs
            .iter()
            .map(|(role, assignee)| format!("{} {}", bold(role), assignee))
            .collect();
        self.out.push_str(&format!("  {}\n", cells.join("   ")));
        Ok(())
    }

    fn table_header(&mut self, headers: &[&str]) -> AppResult<()> {
        self.flush_table();
        self.out.push('\n');
        self.table = Some((Table::new(headers), Vec::new()));
        Ok(())
    }

    fn item_row(&mut self, row: &ScheduledItem) -> AppResult<()> {
        if let Some((table, styles)) = &mut self.table {
            table.add_row(vec![
                row.item.label.clone(),
                row.start_label(),
                row.item.length_label(),
                row.item.speaker.clone(),
                row.item.notes.clone(),
            ]);
            styles.push(if row.item.is_sub_item() {
                RowStyle::Sub
            } else {
                RowStyle::Main
            });
        }
        Ok(())
    }

    fn action_columns(
        &mut self,
        left_title: &str,
        left: &[String],
        right_title: &str,
        right: &[String],
    ) -> AppResult<()> {
        self.flush_table();
        self.out.push_str(&format!("  {}\n", bold(left_title)));
        for step in left {
            self.out.push_str(&format!("    {}\n", step));
        }
        self.out.push_str(&format!("  {}\n", bold(right_title)));
        for step in right {
            self.out.push_str(&format!("    {}\n", step));
        }
        Ok(())
    }

    fn footer_row(&mut self, left: &str, right: &str) -> AppResult<()> {
        self.flush_table();
        self.out.push_str(&format!("\n{}   {}\n", left, right));
        Ok(())
    }
}
