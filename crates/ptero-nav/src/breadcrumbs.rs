use crate::{text::title_case_segment, types::Breadcrumb};

/// Breadcrumb trail for `path` under `base_url`.
///
/// Starts with a `Docs` crumb for the base, then one crumb per remaining path
/// segment. Every crumb but the last links to its cumulative path.
#[must_use]
pub fn breadcrumbs(path: &str, base_url: &str) -> Vec<Breadcrumb> {
  let relative = path.strip_prefix(base_url).unwrap_or(path);
  let parts: Vec<&str> = relative.split('/').filter(|p| !p.is_empty()).collect();

  let mut crumbs = Vec::with_capacity(parts.len() + 1);
  crumbs.push(Breadcrumb {
    label: "Docs".to_string(),
    href:  Some(if base_url.is_empty() { "/" } else { base_url }.to_string()),
  });

  let mut current = base_url.to_string();
  for (i, part) in parts.iter().enumerate() {
    current.push('/');
    current.push_str(part);

    crumbs.push(Breadcrumb {
      label: title_case_segment(part),
      href:  (i + 1 < parts.len()).then(|| current.clone()),
    });
  }

  crumbs
}
