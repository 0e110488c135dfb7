use bevy::prelude::*;

/// Everything needed to place one building: box dimensions, fill color, the
/// world position of its base, and the link it opens when clicked.
#[derive(Debug, Clone)]
pub struct BuildingSpec {
    /// Full box dimensions (width, height, depth).
    pub size: Vec3,
    pub color: Color,
    /// World position of the center of the building's base. The mesh is
    /// lifted by half its height so the base rests here.
    pub position: Vec3,
    /// Destination opened when the building is clicked. `None` makes the
    /// building inert to clicks.
    pub link: Option<&'static str>,
}

/// The compiled-in skyline: three buildings in a row, each linking to its
/// own page.
pub fn building_catalog() -> [BuildingSpec; 3] {
    [
        BuildingSpec {
            size: Vec3::new(3.0, 6.0, 3.0),
            color: Color::srgb_u8(0xff, 0x00, 0x00),
            position: Vec3::new(-10.0, 0.0, 0.0),
            link: Some("https://www.example.com/building1"),
        },
        BuildingSpec {
            size: Vec3::new(4.0, 8.0, 4.0),
            color: Color::srgb_u8(0x00, 0xff, 0x00),
            position: Vec3::new(0.0, 0.0, 0.0),
            link: Some("https://www.example.com/building2"),
        },
        BuildingSpec {
            size: Vec3::new(3.5, 7.0, 3.5),
            color: Color::srgb_u8(0x00, 0x00, 0xff),
            position: Vec3::new(10.0, 0.0, 0.0),
            link: Some("https://www.example.com/building3"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_links_are_distinct_and_non_empty() {
        let links: Vec<&str> = building_catalog()
            .iter()
            .map(|spec| spec.link.expect("every cataloged building carries a link"))
            .collect();
        assert_eq!(links.len(), 3);
        for link in &links {
            assert!(!link.is_empty());
        }
        for (i, a) in links.iter().enumerate() {
            for b in &links[i + 1..] {
                assert_ne!(a, b, "two buildings share a link");
            }
        }
    }

    #[test]
    fn catalog_dimensions_are_positive() {
        for spec in building_catalog() {
            assert!(spec.size.x > 0.0);
            assert!(spec.size.y > 0.0);
            assert!(spec.size.z > 0.0);
        }
    }
}
