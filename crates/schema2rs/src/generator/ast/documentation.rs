use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    Self {
      lines: input.replace("\\n", "\n").lines().map(|line| line.trim_end().to_string()).collect(),
    }
  }

  /// Title and description of a schema node, separated by a blank line.
  #[must_use]
  pub fn from_schema(title: Option<&str>, description: Option<&str>) -> Self {
    let mut docs = Self::default();
    if let Some(title) = title {
      docs.extend(Self::from_raw(title).lines);
    }
    if let Some(description) = description {
      if !docs.is_empty() {
        docs.push("");
      }
      docs.extend(Self::from_raw(description).lines);
    }
    docs
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub fn push(&mut self, line: impl Into<String>) {
    self.lines.push(line.into());
  }

  pub fn extend(&mut self, lines: impl IntoIterator<Item = impl Into<String>>) {
    self.lines.extend(lines.into_iter().map(Into::into));
  }
}

impl ToTokens for Documentation {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let doc_lines = self.lines.iter().map(|line| {
      let line = if line.is_empty() {
        String::new()
      } else {
        format!(" {line}")
      };
      quote! { #[doc = #line] }
    });
    quote! { #(#doc_lines)* }.to_tokens(tokens);
  }
}

impl From<&str> for Documentation {
  fn from(s: &str) -> Self {
    Self::from_raw(s)
  }
}
