//! Fixed life-sphere lookup table.
//!
//! # Invariants
//! - The table has exactly 12 entries and never changes at runtime.
//! - `name` is the unique key; records reference spheres by name only.

use serde::Serialize;

/// One life category used to classify goals, events and habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sphere {
    /// Display name and lookup key.
    pub name: &'static str,
    /// Icon identifier consumed by the presentation layer.
    pub icon_ref: &'static str,
    /// Hex color consumed by the presentation layer.
    pub color_ref: &'static str,
}

const fn sphere(name: &'static str, icon_ref: &'static str, color_ref: &'static str) -> Sphere {
    Sphere {
        name,
        icon_ref,
        color_ref,
    }
}

/// All spheres in display order.
pub static SPHERES: [Sphere; 12] = [
    sphere("Саморазвитие", "BookOpen", "#9b87f5"),
    sphere("Бизнес", "Briefcase", "#7E69AB"),
    sphere("Карьера", "TrendingUp", "#6E59A5"),
    sphere("Отношения", "Heart", "#D946EF"),
    sphere("Семья", "Users", "#8B5CF6"),
    sphere("Дети", "Baby", "#F97316"),
    sphere("Здоровье", "Activity", "#0EA5E9"),
    sphere("Спорт", "Dumbbell", "#10B981"),
    sphere("Увлечения", "Palette", "#F59E0B"),
    sphere("Отдых", "Plane", "#EC4899"),
    sphere("Квартира", "Home", "#8B5CF6"),
    sphere("Финансы", "DollarSign", "#10B981"),
];

/// Looks up a sphere by exact name.
///
/// Records may carry names outside the table; callers get `None` for those
/// and render without sphere styling.
pub fn find_sphere(name: &str) -> Option<&'static Sphere> {
    SPHERES.iter().find(|sphere| sphere.name == name)
}

#[cfg(test)]
mod tests {
    use super::{find_sphere, SPHERES};
    use std::collections::HashSet;

    #[test]
    fn sphere_names_are_unique() {
        let names = SPHERES.iter().map(|s| s.name).collect::<HashSet<_>>();
        assert_eq!(names.len(), SPHERES.len());
    }

    #[test]
    fn find_sphere_matches_exact_name_only() {
        assert_eq!(find_sphere("Здоровье").map(|s| s.icon_ref), Some("Activity"));
        assert!(find_sphere("здоровье").is_none());
        assert!(find_sphere("").is_none());
    }
}
