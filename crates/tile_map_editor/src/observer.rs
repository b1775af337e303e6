//! View notifications emitted by a [`MapSession`](crate::MapSession)

use crate::SelectionSet;

/// Receives every change a session makes to its tile source
///
/// The surrounding view implements this to mirror the model; notifications
/// are fire-and-forget.
pub trait MapObserver {
    fn set_image(&mut self, image: &str);
    fn set_tile_width(&mut self, width: u32);
    fn set_tile_height(&mut self, height: u32);
    fn set_tile_count(&mut self, count: u32);
    fn set_tile_margin(&mut self, margin: u32);
    fn set_tile_spacing(&mut self, spacing: u32);
    fn set_collision(&mut self, collision: &str);
    fn set_material_tag(&mut self, material_tag: &str);
    /// Called once per selection change with the complete new selection
    fn set_selected_tiles(&mut self, selection: &SelectionSet);
}

/// Headless sessions (batch tools, tests) observe nothing
impl MapObserver for () {
    fn set_image(&mut self, _image: &str) {}
    fn set_tile_width(&mut self, _width: u32) {}
    fn set_tile_height(&mut self, _height: u32) {}
    fn set_tile_count(&mut self, _count: u32) {}
    fn set_tile_margin(&mut self, _margin: u32) {}
    fn set_tile_spacing(&mut self, _spacing: u32) {}
    fn set_collision(&mut self, _collision: &str) {}
    fn set_material_tag(&mut self, _material_tag: &str) {}
    fn set_selected_tiles(&mut self, _selection: &SelectionSet) {}
}

impl<O: MapObserver + ?Sized> MapObserver for &mut O {
    fn set_image(&mut self, image: &str) {
        (**self).set_image(image)
    }
    fn set_tile_width(&mut self, width: u32) {
        (**self).set_tile_width(width)
    }
    fn set_tile_height(&mut self, height: u32) {
        (**self).set_tile_height(height)
    }
    fn set_tile_count(&mut self, count: u32) {
        (**self).set_tile_count(count)
    }
    fn set_tile_margin(&mut self, margin: u32) {
        (**self).set_tile_margin(margin)
    }
    fn set_tile_spacing(&mut self, spacing: u32) {
        (**self).set_tile_spacing(spacing)
    }
    fn set_collision(&mut self, collision: &str) {
        (**self).set_collision(collision)
    }
    fn set_material_tag(&mut self, material_tag: &str) {
        (**self).set_material_tag(material_tag)
    }
    fn set_selected_tiles(&mut self, selection: &SelectionSet) {
        (**self).set_selected_tiles(selection)
    }
}

impl<O: MapObserver + ?Sized> MapObserver for Box<O> {
    fn set_image(&mut self, image: &str) {
        (**self).set_image(image)
    }
    fn set_tile_width(&mut self, width: u32) {
        (**self).set_tile_width(width)
    }
    fn set_tile_height(&mut self, height: u32) {
        (**self).set_tile_height(height)
    }
    fn set_tile_count(&mut self, count: u32) {
        (**self).set_tile_count(count)
    }
    fn set_tile_margin(&mut self, margin: u32) {
        (**self).set_tile_margin(margin)
    }
    fn set_tile_spacing(&mut self, spacing: u32) {
        (**self).set_tile_spacing(spacing)
    }
    fn set_collision(&mut self, collision: &str) {
        (**self).set_collision(collision)
    }
    fn set_material_tag(&mut self, material_tag: &str) {
        (**self).set_material_tag(material_tag)
    }
    fn set_selected_tiles(&mut self, selection: &SelectionSet) {
        (**self).set_selected_tiles(selection)
    }
}
