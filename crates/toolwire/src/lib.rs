//! Toolwire — core tool library: calculators, text utilities, generators, and an in-memory record store.

pub mod calc;
pub mod checklist;
pub mod generate;
pub mod shortener;
pub mod store;
pub mod system;
pub mod temperature;
pub mod text;
pub mod types;

pub use calc::{add, multiply, rectangle};
pub use checklist::todo_list;
pub use generate::{color_palette, generate_password, weather_report, PASSWORD_ALPHABET};
pub use shortener::shorten_url;
pub use store::MemoryStore;
pub use system::system_info;
pub use temperature::{convert_temperature, TemperatureUnit};
pub use text::analyze_text;
pub use types::*;
