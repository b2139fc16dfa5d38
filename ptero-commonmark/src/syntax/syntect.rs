//! Syntect-based syntax highlighting backend enhanced with two-face.
//!
//! Syntect uses Sublime Text syntax definitions (TextMate grammars). The
//! two-face crate adds the extended syntax and theme sets bundled with bat,
//! which covers the languages documentation sites usually show (TypeScript,
//! Svelte, TOML, Dockerfile and so on).

use std::sync::OnceLock;

use syntect::{
  highlighting::Theme,
  html::highlighted_html_for_string,
  parsing::SyntaxSet,
};
use two_face::{
  re_exports::syntect::highlighting::ThemeSet,
  theme::{EmbeddedLazyThemeSet, EmbeddedThemeName},
};

use super::{
  error::{SyntaxError, SyntaxResult},
  types::{PLAIN_TEXT, SyntaxConfig, SyntaxHighlighter, SyntaxManager},
};

/// Theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Themes embedded by two-face, by the name users write in configuration.
const EMBEDDED_THEMES: &[(&str, EmbeddedThemeName)] = &[
  ("Ansi", EmbeddedThemeName::Ansi),
  ("Base16", EmbeddedThemeName::Base16),
  ("Base16EightiesDark", EmbeddedThemeName::Base16EightiesDark),
  ("Base16MochaDark", EmbeddedThemeName::Base16MochaDark),
  ("Base16OceanDark", EmbeddedThemeName::Base16OceanDark),
  ("Base16OceanLight", EmbeddedThemeName::Base16OceanLight),
  ("ColdarkCold", EmbeddedThemeName::ColdarkCold),
  ("ColdarkDark", EmbeddedThemeName::ColdarkDark),
  ("DarkNeon", EmbeddedThemeName::DarkNeon),
  ("Dracula", EmbeddedThemeName::Dracula),
  ("Github", EmbeddedThemeName::Github),
  ("GruvboxDark", EmbeddedThemeName::GruvboxDark),
  ("GruvboxLight", EmbeddedThemeName::GruvboxLight),
  ("InspiredGithub", EmbeddedThemeName::InspiredGithub),
  ("MonokaiExtended", EmbeddedThemeName::MonokaiExtended),
  ("MonokaiExtendedLight", EmbeddedThemeName::MonokaiExtendedLight),
  ("Nord", EmbeddedThemeName::Nord),
  ("OneHalfDark", EmbeddedThemeName::OneHalfDark),
  ("OneHalfLight", EmbeddedThemeName::OneHalfLight),
  ("SolarizedDark", EmbeddedThemeName::SolarizedDark),
  ("SolarizedLight", EmbeddedThemeName::SolarizedLight),
  ("SublimeSnazzy", EmbeddedThemeName::SublimeSnazzy),
  ("TwoDark", EmbeddedThemeName::TwoDark),
  ("VisualStudioDarkPlus", EmbeddedThemeName::VisualStudioDarkPlus),
  ("Zenburn", EmbeddedThemeName::Zenburn),
];

/// Syntect-based syntax highlighter
pub struct SyntectHighlighter {
  theme_name: String,
}

impl SyntectHighlighter {
  /// Create a new Syntect highlighter with the specified theme.
  #[must_use]
  pub fn new(theme_name: Option<String>) -> Self {
    Self {
      theme_name: theme_name.unwrap_or_else(|| DEFAULT_THEME.to_string()),
    }
  }

  /// Get the syntect `SyntaxSet`.
  fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
  }

  /// Get the two-face theme set.
  fn theme_set() -> &'static EmbeddedLazyThemeSet {
    static THEME_SET: OnceLock<EmbeddedLazyThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(two_face::theme::extra)
  }

  /// Get the default syntect `ThemeSet` for fallback themes.
  fn default_theme_set() -> &'static ThemeSet {
    static DEFAULT_THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    DEFAULT_THEME_SET.get_or_init(ThemeSet::load_defaults)
  }

  /// Get the theme by name, ignoring case, falling back to the configured
  /// theme and then to [`DEFAULT_THEME`].
  fn get_theme(&self, theme_name: Option<&str>) -> &'static Theme {
    let default_theme_set = Self::default_theme_set();
    let name = match theme_name {
      Some(name) => name,
      None if !self.theme_name.is_empty() => &self.theme_name,
      None => DEFAULT_THEME,
    };

    if let Some((_, theme)) = default_theme_set
      .themes
      .iter()
      .find(|(label, _)| label.eq_ignore_ascii_case(name))
    {
      return theme;
    }

    if let Some((_, embedded)) = EMBEDDED_THEMES
      .iter()
      .find(|(label, _)| label.eq_ignore_ascii_case(name))
    {
      return Self::theme_set().get(*embedded);
    }

    log::debug!("Unknown highlight theme '{name}', using {DEFAULT_THEME}");
    default_theme_set.themes.get(DEFAULT_THEME).unwrap_or_else(|| {
      Self::theme_set().get(EmbeddedThemeName::InspiredGithub)
    })
  }
}

impl Default for SyntectHighlighter {
  fn default() -> Self {
    Self::new(None)
  }
}

impl SyntaxHighlighter for SyntectHighlighter {
  fn name(&self) -> &'static str {
    "Syntect"
  }

  fn supported_languages(&self) -> Vec<String> {
    std::iter::once(PLAIN_TEXT.to_string())
      .chain(Self::syntax_set().syntaxes().iter().flat_map(|syntax| {
        std::iter::once(syntax.name.to_lowercase())
          .chain(syntax.file_extensions.iter().map(|ext| ext.to_lowercase()))
      }))
      .collect()
  }

  fn supports_language(&self, language: &str) -> bool {
    language.eq_ignore_ascii_case(PLAIN_TEXT)
      || Self::syntax_set().find_syntax_by_token(language).is_some()
  }

  fn available_themes(&self) -> Vec<String> {
    let mut themes: Vec<String> =
      Self::default_theme_set().themes.keys().cloned().collect();
    themes.extend(EMBEDDED_THEMES.iter().map(|(name, _)| (*name).to_string()));
    themes.sort();
    themes.dedup();
    themes
  }

  fn highlight(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String> {
    let syntax_set = Self::syntax_set();
    let syntax = syntax_set
      .find_syntax_by_token(language)
      .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let theme = self.get_theme(theme);

    highlighted_html_for_string(code, syntax_set, syntax, theme)
      .map_err(|e| SyntaxError::HighlightingFailed(e.to_string()))
  }
}

/// Create a Syntect-based syntax manager.
///
/// `theme` overrides [`DEFAULT_THEME`]. The syntax and theme sets behind the
/// backend are loaded once per process on first use.
#[must_use]
pub fn create_syntect_manager(theme: Option<String>) -> SyntaxManager {
  let theme = theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
  let highlighter = Box::new(SyntectHighlighter::new(Some(theme.clone())));
  let config = SyntaxConfig {
    default_theme: Some(theme),
    ..SyntaxConfig::default()
  };
  SyntaxManager::new(highlighter, config)
}
