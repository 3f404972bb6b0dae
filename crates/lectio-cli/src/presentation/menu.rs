//! Select-menu rendering.

use std::fmt::Write;

use lectio_core::Menu;

/// Render a menu as aligned `value  label` rows.
///
/// Disabled options (placeholders and notices) are shown as a bracketed
/// heading.
pub fn format_menu(menu: &Menu) -> String {
    let width = menu
        .choices()
        .map(|o| o.value.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for option in menu.options() {
        if option.disabled {
            let _ = writeln!(out, "[{}]", option.label);
        } else if option.value == option.label {
            let _ = writeln!(out, "  {}", option.value);
        } else {
            let _ = writeln!(out, "  {:<width$}  {}", option.value, option.label);
        }
    }
    out
}

pub fn print_menu(menu: &Menu) {
    print!("{}", format_menu(menu));
}
