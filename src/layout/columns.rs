use serde::Serialize;

use crate::item::Item;

/// Which of the two masonry columns an item landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

/// One item placed in a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement<'a> {
    /// Position of the item in the feed list
    pub index: usize,
    pub item: &'a Item,
    /// Estimated offset of the card's top edge within its column
    pub top: f32,
    /// Estimated card height, gap excluded
    pub height: f32,
}

/// A single column and its accumulated estimated height, gaps included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column<'a> {
    pub placements: Vec<Placement<'a>>,
    pub height: f32,
}

impl<'a> Column<'a> {
    fn place(&mut self, index: usize, item: &'a Item, height: f32, gap: f32) {
        self.placements.push(Placement {
            index,
            item,
            top: self.height,
            height,
        });
        self.height += height + gap;
    }

    pub fn items(&self) -> Vec<&'a Item> {
        self.placements.iter().map(|p| p.item).collect()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.index).collect()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Two-column masonry assignment borrowed from a feed list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Columns<'a> {
    pub column_width: f32,
    pub left: Column<'a>,
    pub right: Column<'a>,
}

impl<'a> Columns<'a> {
    pub(super) fn empty(column_width: f32) -> Self {
        Self {
            column_width,
            ..Self::default()
        }
    }

    /// Appends to the shorter column; ties go left.
    pub(super) fn push(&mut self, index: usize, item: &'a Item, height: f32, gap: f32) -> Side {
        if self.left.height <= self.right.height {
            self.left.place(index, item, height, gap);
            Side::Left
        } else {
            self.right.place(index, item, height, gap);
            Side::Right
        }
    }

    pub fn column(&self, side: Side) -> &Column<'a> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn left_items(&self) -> Vec<&'a Item> {
        self.left.items()
    }

    pub fn right_items(&self) -> Vec<&'a Item> {
        self.right.items()
    }

    pub fn left_indices(&self) -> Vec<usize> {
        self.left.indices()
    }

    pub fn right_indices(&self) -> Vec<usize> {
        self.right.indices()
    }

    pub fn left_height(&self) -> f32 {
        self.left.height
    }

    pub fn right_height(&self) -> f32 {
        self.right.height
    }

    /// Absolute difference between the two column heights.
    pub fn imbalance(&self) -> f32 {
        (self.left.height - self.right.height).abs()
    }

    /// Column holding the item at feed position `index`.
    pub fn side_of(&self, index: usize) -> Option<Side> {
        if self.left.placements.iter().any(|p| p.index == index) {
            Some(Side::Left)
        } else if self.right.placements.iter().any(|p| p.index == index) {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}
