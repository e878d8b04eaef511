use gpui::{Pixels, Rgba, px};
use serde::{Deserialize, Deserializer, de::Error};

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    pixels_from(StringOrFloat::deserialize(deserializer)?).map_err(D::Error::custom)
}

pub fn de_opt_pixels<'de, D>(deserializer: D) -> Result<Option<Pixels>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(value) => pixels_from(value).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

pub fn de_color<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;

    parse_color(&string)
        .ok_or_else(|| D::Error::custom(format!("could not parse \"{string}\" as a color")))
}

pub fn de_opt_color<'de, D>(deserializer: D) -> Result<Option<Rgba>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(string) => parse_color(&string)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("could not parse \"{string}\" as a color"))),
        None => Ok(None),
    }
}

/// Font weights are written either as numbers or as numeric strings (`"500"`).
pub fn de_opt_font_weight<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(StringOrFloat::Float(weight)) => Ok(Some(weight)),
        Some(StringOrFloat::String(string)) => match string.trim().parse::<f32>() {
            Ok(weight) => Ok(Some(weight)),
            Err(_) => Err(D::Error::custom("expected a numeric font weight")),
        },
        None => Ok(None),
    }
}

pub fn de_opt_opacity<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f32>::deserialize(deserializer)? {
        Some(opacity) if !(0.0..=1.0).contains(&opacity) => Err(D::Error::custom(
            "opacity must be between 0 and 1",
        )),
        opacity => Ok(opacity),
    }
}

fn pixels_from(value: StringOrFloat) -> Result<Pixels, &'static str> {
    match value {
        StringOrFloat::Float(pixels) => Ok(px(pixels)),

        StringOrFloat::String(string) => {
            let Some(string) = string.strip_suffix("px") else {
                return Err("expected string to end with 'px'");
            };

            string
                .trim()
                .parse::<f32>()
                .map(px)
                .map_err(|_| "could not convert string into pixels")
        }
    }
}

/// Parses `transparent` and anything [`Rgba`] parses from a hex string,
/// with the leading `#` optional.
pub fn parse_color(string: &str) -> Option<Rgba> {
    let string = string.trim();

    if string.eq_ignore_ascii_case("transparent") {
        return Some(Rgba {
            r: 0.,
            g: 0.,
            b: 0.,
            a: 0.,
        });
    }

    if string.starts_with('#') {
        Rgba::try_from(string).ok()
    } else {
        Rgba::try_from(format!("#{string}").as_str()).ok()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
