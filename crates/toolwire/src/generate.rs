//! Randomised generators: passwords, color palettes, and simulated weather.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{ColorSwatch, Palette, ToolkitError, ToolkitResult, WeatherReport};

/// Characters a generated password is drawn from.
pub const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

pub const MAX_PASSWORD_LENGTH: usize = 256;
pub const MAX_PALETTE_SIZE: usize = 64;

const WEATHER_CONDITIONS: &[&str] = &["Sunny", "Cloudy", "Rainy", "Snowy", "Foggy"];

/// Generate a password of `length` characters using the OS entropy source.
pub fn generate_password(length: usize) -> ToolkitResult<String> {
    generate_password_with(&mut OsRng, length)
}

pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> ToolkitResult<String> {
    if length == 0 || length > MAX_PASSWORD_LENGTH {
        return Err(ToolkitError::InvalidInput(format!(
            "Password length must be between 1 and {MAX_PASSWORD_LENGTH}, got {length}"
        )));
    }

    Ok((0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect())
}

/// Generate a palette of `count` random colors.
pub fn color_palette(count: usize) -> ToolkitResult<Palette> {
    color_palette_with(&mut rand::thread_rng(), count)
}

pub fn color_palette_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> ToolkitResult<Palette> {
    if count == 0 || count > MAX_PALETTE_SIZE {
        return Err(ToolkitError::InvalidInput(format!(
            "Color count must be between 1 and {MAX_PALETTE_SIZE}, got {count}"
        )));
    }

    let colors = (1..=count)
        .map(|n| {
            let (r, g, b): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
            ColorSwatch {
                hex: format!("#{r:02x}{g:02x}{b:02x}"),
                rgb: format!("rgb({r}, {g}, {b})"),
                name: format!("Color {n}"),
            }
        })
        .collect();

    Ok(Palette {
        palette_name: "Random Palette".to_string(),
        color_count: count,
        colors,
    })
}

/// Simulate a weather report for `city`.
pub fn weather_report(city: &str) -> WeatherReport {
    weather_report_with(&mut rand::thread_rng(), city)
}

pub fn weather_report_with<R: Rng + ?Sized>(rng: &mut R, city: &str) -> WeatherReport {
    let temperatures: [i32; 3] = [
        rng.gen_range(-10..=35),
        rng.gen_range(-10..=35),
        rng.gen_range(-10..=35),
    ];
    let condition = WEATHER_CONDITIONS.choose(rng).copied().unwrap_or("Sunny");

    WeatherReport {
        city: city.to_string(),
        current_temperature: temperatures[0],
        min_temperature: temperatures.iter().copied().min().unwrap_or(temperatures[0]),
        max_temperature: temperatures.iter().copied().max().unwrap_or(temperatures[0]),
        condition: condition.to_string(),
        humidity: rng.gen_range(30..=90),
        wind_speed: rng.gen_range(5..=25),
    }
}
