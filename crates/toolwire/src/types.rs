//! Core data types shared by the tool implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record held in the in-memory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub created_at: DateTime<Utc>,
}

/// A todo record held in the in-memory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub task: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A checklist built from loose items. Not recorded in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub todo_list: Vec<String>,
    pub total_items: usize,
    pub status: String,
}

/// Area and perimeter of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
    pub area: f64,
    pub perimeter: f64,
}

/// Result of a temperature conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureConversion {
    pub original_value: f64,
    pub original_unit: String,
    pub converted_value: f64,
    pub converted_unit: String,
}

/// Simple statistics about a block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_word_length: f64,
    pub most_common_word: Option<String>,
}

/// A shortened URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrl {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
}

/// Simulated weather readings for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub current_temperature: i32,
    pub min_temperature: i32,
    pub max_temperature: i32,
    pub condition: String,
    pub humidity: u32,
    pub wind_speed: u32,
}

/// One color in a generated palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    pub hex: String,
    pub rgb: String,
    pub name: String,
}

/// A generated color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub palette_name: String,
    pub color_count: usize,
    pub colors: Vec<ColorSwatch>,
}

/// Host platform description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub family: String,
    pub arch: String,
}

/// Errors that can occur in the tool library.
#[derive(thiserror::Error, Debug)]
pub enum ToolkitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience result type.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
