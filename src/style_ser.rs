// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde glue for theme styles. A style is written as space-separated
//! words, for example `"bold cyan"` or `"underline 208 on black"`.

use ansi_term::{Color, Style};
use serde::{de::Error, Deserialize, Deserializer, Serializer};

const NAMED: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("purple", Color::Purple),
    ("magenta", Color::Purple),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

/// Parses a color name, an xterm palette index, `#rrggbb`, or
/// `rgb(r,g,b)`.
pub fn parse_color(input: &str) -> Option<Color> {
    if let Some(&(_, color)) = NAMED.iter().find(|(name, _)| *name == input) {
        return Some(color);
    }
    if let Ok(index) = input.parse::<u8>() {
        return Some(Color::Fixed(index));
    }
    if let Some(hex) = input.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        return Some(Color::RGB((value >> 16) as u8, (value >> 8) as u8, value as u8));
    }
    let inner = input.strip_prefix("rgb(")?.strip_suffix(')')?;
    let channels = inner
        .split(',')
        .map(|c| c.trim().parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;
    match channels[..] {
        [r, g, b] => Some(Color::RGB(r, g, b)),
        _ => None,
    }
}

fn color_name(color: Color) -> String {
    match color {
        Color::Fixed(index) => index.to_string(),
        Color::RGB(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        named => NAMED
            .iter()
            .find(|(_, c)| *c == named)
            .map(|(name, _)| (*name).to_owned())
            .unwrap_or_else(|| "plain".to_owned()),
    }
}

pub fn parse_style(input: &str) -> Result<Style, String> {
    let mut style = Style::new();
    let mut background = false;
    for word in input.split_whitespace() {
        style = match word {
            "bold" => style.bold(),
            "dimmed" | "dim" => style.dimmed(),
            "italic" => style.italic(),
            "underline" => style.underline(),
            "blink" => style.blink(),
            "reverse" => style.reverse(),
            "hidden" => style.hidden(),
            "strikethrough" => style.strikethrough(),
            "plain" | "default" => style,
            "on" => {
                background = true;
                continue;
            }
            word => match parse_color(word) {
                Some(color) if background => style.on(color),
                Some(color) => style.fg(color),
                None => return Err(format!("invalid style word `{}`", word)),
            },
        };
        background = false;
    }
    Ok(style)
}

pub fn style_to_string(style: &Style) -> String {
    let flags = [
        (style.is_bold, "bold"),
        (style.is_dimmed, "dimmed"),
        (style.is_italic, "italic"),
        (style.is_underline, "underline"),
        (style.is_blink, "blink"),
        (style.is_reverse, "reverse"),
        (style.is_hidden, "hidden"),
        (style.is_strikethrough, "strikethrough"),
    ];
    let mut words = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| (*name).to_owned())
        .collect::<Vec<_>>();
    if let Some(fg) = style.foreground {
        words.push(color_name(fg));
    }
    if let Some(bg) = style.background {
        words.push("on".to_owned());
        words.push(color_name(bg));
    }
    if words.is_empty() {
        words.push("plain".to_owned());
    }
    words.join(" ")
}

pub fn deserialize<'de, D>(des: D) -> Result<Style, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(des)?;
    parse_style(&string).map_err(D::Error::custom)
}

pub fn serialize<S>(style: &Style, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    ser.serialize_str(&style_to_string(style))
}
