pub mod agenda;
pub mod item;
pub mod template;

pub use agenda::{ActionStep, Agenda, ArchiveEntry, RoleAssignment};
pub use item::{AgendaItem, ScheduledItem};
pub use template::AgendaTemplate;
