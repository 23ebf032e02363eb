use crate::palette::Palette;

/// Config key names for palette slots 0-7 (bright variants reuse them).
const SLOT_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// A named output format for one terminal emulator's config syntax.
/// Selection is by exact match on `flag_name`; rendering is a pure function
/// of the palette.
pub struct Format {
    pub flag_name: &'static str,
    pub friendly_name: &'static str,
    pub render: fn(&Palette) -> String,
}

pub const FORMATS: &[Format] = &[
    Format {
        flag_name: "default",
        friendly_name: "Plain hex list",
        render: render_default,
    },
    Format {
        flag_name: "xresources",
        friendly_name: "X resources (xterm, urxvt)",
        render: render_xresources,
    },
    Format {
        flag_name: "shell",
        friendly_name: "Shell export statements",
        render: render_shell,
    },
    Format {
        flag_name: "kitty",
        friendly_name: "kitty",
        render: render_kitty,
    },
    Format {
        flag_name: "alacritty",
        friendly_name: "Alacritty (TOML)",
        render: render_alacritty,
    },
];

/// Find a format by its flag name.
pub fn lookup(name: &str) -> Option<&'static Format> {
    FORMATS.iter().find(|f| f.flag_name == name)
}

/// Comma-separated list of flag names, for help and error messages.
pub fn supported_names() -> String {
    FORMATS
        .iter()
        .map(|f| f.flag_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_default(palette: &Palette) -> String {
    let mut out = String::new();
    for color in palette {
        out.push_str(&color.to_hex());
        out.push('\n');
    }
    out
}

fn render_xresources(palette: &Palette) -> String {
    let mut out = String::new();
    for (i, color) in palette.iter().enumerate() {
        out.push_str(&format!("*color{}: {}\n", i, color.to_hex()));
    }
    out
}

fn render_shell(palette: &Palette) -> String {
    let mut out = String::new();
    for (i, color) in palette.iter().enumerate() {
        out.push_str(&format!("export COLOR{}='{}'\n", i, color.to_hex()));
    }
    out
}

fn render_kitty(palette: &Palette) -> String {
    let mut out = String::new();
    for (i, color) in palette.iter().enumerate() {
        out.push_str(&format!("color{} {}\n", i, color.to_hex()));
    }
    out
}

fn render_alacritty(palette: &Palette) -> String {
    let mut out = String::new();
    out.push_str("[colors.normal]\n");
    for (name, color) in SLOT_NAMES.iter().zip(palette.iter().take(8)) {
        out.push_str(&format!("{} = \"{}\"\n", name, color.to_hex()));
    }
    out.push_str("\n[colors.bright]\n");
    for (name, color) in SLOT_NAMES.iter().zip(palette.iter().skip(8)) {
        out.push_str(&format!("{} = \"{}\"\n", name, color.to_hex()));
    }
    out
}
