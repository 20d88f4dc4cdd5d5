//! Dropdown markup for each host CSS framework
//!
//! Each renderer emits the HTML fragment the host page's own widgets would
//! produce, so the switcher blends into the existing navigation.

use serde::Serialize;

use crate::locale::DropdownStyle;
use crate::switcher::resolver::CompatibleTarget;

/// Inline style the host applies to every element matching `selector` under
/// the anchor's parent, the injected dropdown included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentRestyle {
    pub selector: &'static str,
    pub style: &'static str,
}

/// Renders a language dropdown as an HTML fragment
pub trait Dropdown: Send + Sync {
    /// Render the dropdown
    ///
    /// `current_title` labels the toggle; every target becomes one menu link.
    /// `emphasized` selects the highlighted variant where the framework has one.
    fn render(
        &self,
        current_title: &str,
        targets: &[CompatibleTarget<'_>],
        emphasized: bool,
    ) -> String;

    /// Style the host must also give the menus next to the dropdown
    fn parent_restyle(&self) -> Option<ParentRestyle> {
        None
    }
}

/// Returns the renderer for `style`
pub fn dropdown_for(style: DropdownStyle) -> &'static dyn Dropdown {
    match style {
        DropdownStyle::Bootstrap4 => &Bootstrap4Dropdown,
        DropdownStyle::Fomantic => &FomanticDropdown,
        DropdownStyle::Tailwind => &TailwindDropdown,
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// Bootstrap 4 `.dropdown` with a `ul.dropdown-menu`
pub struct Bootstrap4Dropdown;

impl Dropdown for Bootstrap4Dropdown {
    fn render(
        &self,
        current_title: &str,
        targets: &[CompatibleTarget<'_>],
        _emphasized: bool,
    ) -> String {
        let mut html = String::new();
        html.push_str(r#"<div class="dropdown dropdown-lang" style="margin-left: 10px;">"#);
        html.push_str(&format!(
            r#"<button id="dropdownMenuLang" class="btn dropdown-toggle" type="button" data-toggle="dropdown" aria-expanded="false">{}<span class="caret"></span></button>"#,
            escape_html(current_title)
        ));
        html.push_str(
            r#"<ul class="dropdown-menu" role="menu" aria-labelledby="dropdownMenuLang">"#,
        );
        for target in targets {
            html.push_str(&format!(
                r#"<li role="presentation"><a href="{}" role="menuitem" tabindex="-1">{}</a></li>"#,
                escape_html(&target.target_url),
                escape_html(target.title())
            ));
        }
        html.push_str("</ul></div>");
        html
    }
}

/// Fomantic-UI `.ui.dropdown.simple` label
pub struct FomanticDropdown;

impl Dropdown for FomanticDropdown {
    fn render(
        &self,
        current_title: &str,
        targets: &[CompatibleTarget<'_>],
        emphasized: bool,
    ) -> String {
        let class = if emphasized {
            "ui dropdown simple green basic label"
        } else {
            "ui dropdown simple basic label"
        };

        let mut html = String::new();
        html.push_str(&format!(r#"<div class="{class}" style="margin-left: 10px;">"#));
        html.push_str(&format!(
            r#"<div class="text">{}</div><i class="dropdown icon"></i>"#,
            escape_html(current_title)
        ));
        html.push_str(r#"<div class="menu">"#);
        for target in targets {
            html.push_str(&format!(
                r#"<a class="item" href="{}">{}</a>"#,
                escape_html(&target.target_url),
                escape_html(target.title())
            ));
        }
        html.push_str("</div></div>");
        html
    }

    // learnku pins menu sizes; the site's own version menu sits beside ours
    fn parent_restyle(&self) -> Option<ParentRestyle> {
        Some(ParentRestyle {
            selector: ".menu",
            style: "width: auto !important; height: auto !important;",
        })
    }
}

/// Tailwind `<details>` disclosure menu
pub struct TailwindDropdown;

impl Dropdown for TailwindDropdown {
    fn render(
        &self,
        current_title: &str,
        targets: &[CompatibleTarget<'_>],
        emphasized: bool,
    ) -> String {
        let summary_class = if emphasized {
            "cursor-pointer rounded-md bg-red-500 px-3 py-1 text-sm font-medium text-white"
        } else {
            "cursor-pointer rounded-md border border-gray-200 px-3 py-1 text-sm font-medium text-gray-700"
        };

        let mut html = String::new();
        html.push_str(r#"<details class="relative ml-2.5">"#);
        html.push_str(&format!(
            r#"<summary class="{summary_class}">{}</summary>"#,
            escape_html(current_title)
        ));
        html.push_str(
            r#"<ul class="absolute right-0 z-10 mt-1 min-w-max rounded-md bg-white py-1 shadow-lg">"#,
        );
        for target in targets {
            html.push_str(&format!(
                r#"<li><a class="block px-4 py-1 text-sm text-gray-700 hover:bg-gray-100" href="{}">{}</a></li>"#,
                escape_html(&target.target_url),
                escape_html(target.title())
            ));
        }
        html.push_str("</ul></details>");
        html
    }
}
