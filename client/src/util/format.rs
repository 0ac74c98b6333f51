//! Display formatting for amounts, dates and ratings.
//!
//! Output follows Colombian Spanish conventions: `.` groups thousands and
//! dates read "lunes, 15 de enero de 2024".

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{Datelike, NaiveDate, Weekday};

/// Group digits in threes with `.`: `2115000` -> `2.115.000`.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Price with currency sign, e.g. `$45.000`.
pub fn format_price(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Price with sign and currency code, e.g. `$135.000 COP`.
pub fn format_price_cop(amount: u64) -> String {
    format!("{} COP", format_price(amount))
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];
    MONTHS[(month.clamp(1, 12) - 1) as usize]
}

/// Long Spanish date: `lunes, 15 de enero de 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// One decimal place, or a placeholder when there is no rating.
pub fn format_rating(rating: Option<f32>) -> String {
    match rating {
        Some(value) => format!("{value:.1}"),
        None => "Sin calificación".to_owned(),
    }
}
