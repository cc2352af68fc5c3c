use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a block, unique within a document.
///
/// Assigned once at construction and never reassigned; duplicating a block
/// always mints a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Horizontal placement of a block's content within its row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    /// Value for the cell `align` attribute
    pub fn as_attr(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }
}

/// Vertical placement of a block's content within its row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// Value for the cell `valign` attribute
    pub fn as_attr(self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

/// Style fields shared by every block kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    pub color: String,
    pub background_color: String,
    /// Font size in pixels
    pub font_size: u32,
    /// Cell padding in pixels
    pub padding: u32,
    pub align_x: HorizontalAlign,
    pub align_y: VerticalAlign,
    /// Corner radius in pixels; only buttons render it
    pub radius: u32,
}

/// Discriminant for the three block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
    Button,
}

/// Kind-specific payload.
///
/// This is a closed set: re-typing a block is not a supported mutation,
/// only removal and insertion of whole blocks. The sum type also makes
/// kind-foreign fields unrepresentable (a text block cannot carry a url).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockBody {
    Text {
        content: String,
    },
    Image {
        /// Collaborator-assigned public URL; empty until the upload resolves
        src: String,
        /// Pixel width, independently resizable
        width: u32,
        /// Pixel height, independently resizable
        height: u32,
    },
    Button {
        /// Label
        content: String,
        /// Href target; "#" when absent
        url: String,
    },
}

/// One editable content unit of an email document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub style: BlockStyle,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl Block {
    /// Construct a block with kind-appropriate defaults
    pub fn new(kind: BlockKind) -> Self {
        let mut style = BlockStyle {
            color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
            font_size: 16,
            padding: 16,
            align_x: HorizontalAlign::Center,
            align_y: VerticalAlign::Middle,
            radius: 6,
        };

        let body = match kind {
            BlockKind::Text => BlockBody::Text {
                content: "Edit text".to_string(),
            },
            BlockKind::Image => BlockBody::Image {
                src: String::new(),
                width: 600,
                height: 300,
            },
            BlockKind::Button => {
                style.background_color = "#000000".to_string();
                BlockBody::Button {
                    content: "Edit text".to_string(),
                    url: "#".to_string(),
                }
            }
        };

        Self {
            id: BlockId::generate(),
            style,
            body,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self.body {
            BlockBody::Text { .. } => BlockKind::Text,
            BlockBody::Image { .. } => BlockKind::Image,
            BlockBody::Button { .. } => BlockKind::Button,
        }
    }

    /// Copy of this block under a freshly generated identity
    pub fn duplicate(&self) -> Self {
        Self {
            id: BlockId::generate(),
            style: self.style.clone(),
            body: self.body.clone(),
        }
    }

    /// Text the block contributes to content heuristics. Button labels
    /// count; image blocks contribute nothing.
    pub fn text_content(&self) -> Option<&str> {
        match &self.body {
            BlockBody::Text { content } | BlockBody::Button { content, .. } => Some(content),
            BlockBody::Image { .. } => None,
        }
    }
}
