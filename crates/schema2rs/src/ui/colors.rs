use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{AnsiColor, Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

type Rgb = (u8, u8, u8);

/// One colour per role, for one background.
struct Palette {
  timestamp: Rgb,
  primary: Rgb,
  accent: Rgb,
  info: Rgb,
  success: Rgb,
  label: Rgb,
  value: Rgb,
}

const DARK: Palette = Palette {
  timestamp: (118, 166, 166),
  primary: (191, 126, 4),
  accent: (166, 84, 55),
  info: (118, 166, 166),
  success: (118, 166, 166),
  label: (217, 164, 4),
  value: (242, 211, 56),
};

const LIGHT: Palette = Palette {
  timestamp: (92, 62, 38),
  primary: (70, 42, 25),
  accent: (211, 99, 70),
  info: (40, 111, 170),
  success: (34, 142, 90),
  label: (176, 103, 66),
  value: (199, 146, 76),
};

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

/// Terminal colour as `comfy-table` expects it. Only the colours [`Colors`] hands out are mapped.
pub fn comfy(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    _ => ComfyColor::Reset,
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn palette(&self) -> &'static Palette {
    match self.theme {
      Theme::Dark => &DARK,
      Theme::Light => &LIGHT,
    }
  }

  const fn pick(&self, (r, g, b): Rgb) -> Color {
    if self.enabled { Color::Rgb { r, g, b } } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(self.palette().timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(self.palette().primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(self.palette().accent)
  }

  pub const fn info(&self) -> Color {
    self.pick(self.palette().info)
  }

  pub const fn success(&self) -> Color {
    self.pick(self.palette().success)
  }

  pub const fn label(&self) -> Color {
    self.pick(self.palette().label)
  }

  pub const fn value(&self) -> Color {
    self.pick(self.palette().value)
  }

  /// Help output styles, always using the dark palette.
  pub const fn clap_styles() -> Styles {
    const fn rgb((r, g, b): Rgb) -> Option<ClapColor> {
      Some(ClapColor::Rgb(RgbColor(r, g, b)))
    }

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(rgb(DARK.label)))
      .usage(Style::new().bold().fg_color(rgb(DARK.label)))
      .literal(Style::new().fg_color(rgb(DARK.success)))
      .placeholder(Style::new().fg_color(rgb(DARK.info)))
      .error(Style::new().bold().fg_color(Some(ClapColor::Ansi(AnsiColor::Red))))
      .valid(Style::new().fg_color(rgb(DARK.success)))
      .invalid(Style::new().bold().fg_color(rgb(DARK.accent)))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

/// `COLORFGBG` ends with the background colour index; 8 and above are light backgrounds.
fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  Theme::Dark
}
