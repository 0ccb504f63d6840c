use super::{Color, Hsl};

pub(super) fn parse_color(input: &str) -> Option<Color> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = input.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, &["rgba", "rgb"]) {
        return parse_rgb_function(args);
    }
    if let Some(args) = function_args(&lower, &["hsla", "hsl"]) {
        return parse_hsl_function(args);
    }
    if lower == "transparent" {
        return Some(Color::from_rgba8(0, 0, 0, 0));
    }

    palette::named::from_str(&lower).map(|rgb| Color::from_rgba8(rgb.red, rgb.green, rgb.blue, 255))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Inner text of `name(...)` for the first matching name.
fn function_args<'a>(input: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        input
            .strip_prefix(name)?
            .trim_start()
            .strip_prefix('(')?
            .strip_suffix(')')
    })
}

/// Splits `a, b, c[, d]` or `a b c[ / d]` into three components and an
/// optional alpha.
fn split_args(args: &str) -> Option<([&str; 3], Option<&str>)> {
    let (main, slash_alpha) = match args.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha.trim())),
        None => (args, None),
    };

    let parts: Vec<&str> = main
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match (parts.as_slice(), slash_alpha) {
        ([a, b, c], alpha) => Some(([a, b, c], alpha)),
        ([a, b, c, alpha], None) => Some(([a, b, c], Some(alpha))),
        _ => None,
    }
}

fn parse_number(value: &str) -> Option<f32> {
    let number = value.parse::<f32>().ok()?;
    number.is_finite().then_some(number)
}

fn parse_rgb_channel(value: &str) -> Option<f32> {
    match value.strip_suffix('%') {
        Some(percent) => Some(parse_number(percent)? / 100.0),
        None => Some(parse_number(value)? / 255.0),
    }
}

fn parse_percent(value: &str) -> Option<f32> {
    parse_number(value.strip_suffix('%').unwrap_or(value))
}

fn parse_alpha(value: Option<&str>) -> Option<f32> {
    match value {
        None => Some(1.0),
        Some(value) => match value.strip_suffix('%') {
            Some(percent) => Some(parse_number(percent)? / 100.0),
            None => parse_number(value),
        },
    }
}

fn parse_rgb_function(args: &str) -> Option<Color> {
    let ([r, g, b], alpha) = split_args(args)?;

    Some(Color::from_unit_rgba(
        parse_rgb_channel(r)?,
        parse_rgb_channel(g)?,
        parse_rgb_channel(b)?,
        parse_alpha(alpha)?,
    ))
}

fn parse_hsl_function(args: &str) -> Option<Color> {
    let ([h, s, l], alpha) = split_args(args)?;
    let hue = parse_number(h.strip_suffix("deg").unwrap_or(h))?;

    let color = Color::from_hsl(Hsl {
        h: hue,
        s: parse_percent(s)?,
        l: parse_percent(l)?,
    });
    Some(color.with_alpha(parse_alpha(alpha)?))
}
