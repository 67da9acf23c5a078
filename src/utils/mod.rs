pub mod environment;
pub mod terminal;
pub mod text;

pub use environment::{get_projects_dir, projects_dir_for_home};
pub use terminal::strip_ansi_codes;
pub use text::{ELLIPSIS, single_line, truncate_chars, truncate_with_ellipsis};
