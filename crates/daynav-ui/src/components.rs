mod month_caption;
mod nav_bar;

pub use month_caption::MonthCaption;
pub use nav_bar::NavBar;
