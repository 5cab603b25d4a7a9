use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

const NAMED_CSS_COLOR_MAX_LENGTH: usize = 20;

/// CSS named colors as `0xrrggbb`.
const NAMED_CSS_COLOR_TABLE: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

static NAMED_CSS_COLORS: Lazy<HashMap<&'static str, RGBA>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, RGBA> = NAMED_CSS_COLOR_TABLE
        .iter()
        .map(|&(name, rgb)| {
            (
                name,
                RGBA {
                    red: (rgb >> 16) as u8,
                    green: (rgb >> 8) as u8,
                    blue: rgb as u8,
                    alpha: 255,
                },
            )
        })
        .collect();

    m.insert("transparent", RGBA::TRANSPARENT);

    m
});

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RGBA {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl RGBA {
    pub const BLACK: RGBA = RGBA {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 255,
    };

    pub const TRANSPARENT: RGBA = RGBA {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0,
    };
}

impl fmt::Display for RGBA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;

        if self.alpha != 255 {
            write!(f, "{:02x}", self.alpha)?;
        }

        Ok(())
    }
}

impl From<RGBA> for image::Rgba<u8> {
    fn from(color: RGBA) -> image::Rgba<u8> {
        image::Rgba([color.red, color.green, color.blue, color.alpha])
    }
}

#[derive(Debug, PartialEq)]
pub enum ColorParseError {
    InvalidInput,
}

impl FromStr for RGBA {
    type Err = ColorParseError;

    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` and
    /// named colors.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();

        if let Some(hex) = string.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = string.to_ascii_lowercase();

        if let Some(arguments) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let arguments = arguments
                .strip_suffix(')')
                .ok_or(ColorParseError::InvalidInput)?;

            return parse_functional(arguments);
        }

        if lower.len() > NAMED_CSS_COLOR_MAX_LENGTH {
            return Err(ColorParseError::InvalidInput);
        }

        NAMED_CSS_COLORS
            .get(lower.as_str())
            .copied()
            .ok_or(ColorParseError::InvalidInput)
    }
}

fn parse_hex(hex: &str) -> Result<RGBA, ColorParseError> {
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|digit| digit as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or(ColorParseError::InvalidInput)?;

    match digits.len() {
        // "#f0c" or "#f0c8"
        3 | 4 => Ok(RGBA {
            red: digits[0] * 17,
            green: digits[1] * 17,
            blue: digits[2] * 17,
            alpha: digits.get(3).map_or(255, |alpha| alpha * 17),
        }),
        // "#ff00cc" or "#ff00cc80"
        6 | 8 => {
            let channel = |index: usize| digits[index] * 16 + digits[index + 1];

            Ok(RGBA {
                red: channel(0),
                green: channel(2),
                blue: channel(4),
                alpha: if digits.len() == 8 { channel(6) } else { 255 },
            })
        }
        _ => Err(ColorParseError::InvalidInput),
    }
}

fn parse_functional(arguments: &str) -> Result<RGBA, ColorParseError> {
    let components = if arguments.contains(',') {
        arguments.split(',').map(str::trim).collect::<Vec<_>>()
    } else {
        arguments.split_whitespace().collect::<Vec<_>>()
    };

    let numbers = components
        .iter()
        .map(|component| component.parse::<f32>().ok().filter(|n| n.is_finite()))
        .collect::<Option<Vec<f32>>>()
        .ok_or(ColorParseError::InvalidInput)?;

    let channel = |value: f32| value.max(0.0).min(255.0).round() as u8;

    match numbers.as_slice() {
        &[red, green, blue] => Ok(RGBA {
            red: channel(red),
            green: channel(green),
            blue: channel(blue),
            alpha: 255,
        }),
        &[red, green, blue, alpha] => Ok(RGBA {
            red: channel(red),
            green: channel(green),
            blue: channel(blue),
            alpha: channel(alpha.max(0.0).min(1.0) * 255.0),
        }),
        _ => Err(ColorParseError::InvalidInput),
    }
}

#[cfg(test)]
mod tests {

    use super::{ColorParseError, RGBA};

    #[test]
    pub fn test_parse() {
        let black = "#000";
        let bg_color = "#f1eee8";

        assert_eq!(Ok(RGBA::BLACK), black.parse::<RGBA>());
        assert_eq!(
            Ok(RGBA {
                red: 241,
                green: 238,
                blue: 232,
                alpha: 255
            }),
            bg_color.parse::<RGBA>()
        );
        assert_eq!(
            Ok(RGBA {
                red: 255,
                green: 0,
                blue: 204,
                alpha: 136
            }),
            "#F0C8".parse::<RGBA>()
        );
    }

    #[test]
    pub fn test_parse_functional() {
        assert_eq!(
            Ok(RGBA {
                red: 255,
                green: 128,
                blue: 0,
                alpha: 128
            }),
            "rgba(255, 128, 0, 0.5)".parse::<RGBA>()
        );
        assert_eq!(
            Ok(RGBA {
                red: 10,
                green: 20,
                blue: 30,
                alpha: 255
            }),
            "RGB(10,20,30)".parse::<RGBA>()
        );
        assert_eq!(
            Ok(RGBA {
                red: 255,
                green: 0,
                blue: 0,
                alpha: 0
            }),
            "rgba(300, -4, 0, -1)".parse::<RGBA>()
        );
        assert_eq!(
            Err(ColorParseError::InvalidInput),
            "rgba(1, 2)".parse::<RGBA>()
        );
    }

    #[test]
    pub fn test_parse_invalid() {
        for input in &["#", "#ff", "#fffff", "#ggg", "#+ffff", "url(x)", "notacolor", ""] {
            assert_eq!(
                Err(ColorParseError::InvalidInput),
                input.parse::<RGBA>(),
                "{}",
                input
            );
        }
    }

    #[test]
    pub fn test_to_string() {
        let color = RGBA {
            red: 241,
            green: 238,
            blue: 232,
            alpha: 255,
        };

        assert_eq!("#f1eee8", color.to_string());
        assert_eq!(color.to_string().parse::<RGBA>(), Ok(color));
    }

    #[test]
    pub fn test_to_string_with_transparency() {
        let color = RGBA {
            red: 225,
            green: 236,
            blue: 244,
            alpha: 178,
        };

        assert_eq!("#e1ecf4b2", color.to_string());

        assert_eq!(color.to_string().parse::<RGBA>(), Ok(color));
    }

    #[test]
    pub fn test_named_colors() {
        assert_eq!(
            Ok(RGBA {
                red: 255,
                green: 255,
                blue: 0,
                alpha: 255,
            }),
            "Yellow".parse::<RGBA>()
        );
        assert_eq!(Ok(RGBA::TRANSPARENT), "transparent".parse::<RGBA>());
    }
}
