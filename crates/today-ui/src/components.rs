mod app_header;
mod font_loader;
mod quote_card;
mod quote_panel;
mod task_form;
mod task_list;
mod task_list_row;

pub use app_header::AppHeader;
pub use font_loader::FontLoader;
pub use quote_card::QuoteCard;
pub use quote_panel::QuotePanel;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
