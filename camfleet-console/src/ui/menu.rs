use std::io::{self, Write};

use camfleet_core::nav::{menu_items, RouteRegistry};

use crate::data::View;

pub fn render(
    registry: &RouteRegistry<View>,
    current: View,
    out: &mut impl Write,
) -> io::Result<()> {
    let home = registry.home();
    writeln!(out, "Camfleet ({} at {})", home.name, home.path)?;
    for item in menu_items(registry) {
        let selected = registry
            .find_by_path(item.path)
            .is_some_and(|route| route.view == current);
        let marker = if selected { '>' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<24} {:<20} [{}]",
            item.name, item.path, item.icon
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RouteTable;

    #[test]
    fn marks_the_current_view() {
        let registry = RouteTable::V2.registry().unwrap();
        let mut out = Vec::new();
        render(&registry, View::Settings, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Camfleet (Home at /)");
        assert!(lines[1].starts_with("  Streams"));
        assert!(lines[2].starts_with("> Settings"));
        assert!(lines[3].ends_with("[mdi-truck]"));
    }
}
