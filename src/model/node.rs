use serde::Serialize;

/// What a graph node stands for. Not rendered; used for summaries and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeKind {
    /// Created implicitly by an edge to an unknown id.
    #[default]
    Bare,
    Category {
        depth: usize,
    },
    Skill {
        level: u32,
    },
    Legend {
        level: u32,
    },
}

/// Initial position and physics flags for nodes the user may drag around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub fixed: bool,
    pub physics: bool,
}

/// A node as handed to the renderer. Field names follow vis-network's node options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillNode {
    pub id: String,
    pub label: String,
    #[serde(skip)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(flatten)]
    pub placement: Option<Placement>,
}

impl SkillNode {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            kind,
            size: None,
            color: None,
            group: None,
            title: None,
            shape: None,
            placement: None,
        }
    }

    pub fn bare(id: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Bare)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn is_legend(&self) -> bool {
        matches!(self.kind, NodeKind::Legend { .. })
    }

    /// Fold a second record for the same id into this one.
    ///
    /// Attributes set on `incoming` win; attributes it leaves unset keep their
    /// current value. A bare record never downgrades the kind.
    pub fn merge(&mut self, incoming: SkillNode) {
        if incoming.kind != NodeKind::Bare {
            self.kind = incoming.kind;
            self.label = incoming.label;
        }
        overwrite(&mut self.size, incoming.size);
        overwrite(&mut self.color, incoming.color);
        overwrite(&mut self.group, incoming.group);
        overwrite(&mut self.title, incoming.title);
        overwrite(&mut self.shape, incoming.shape);
        overwrite(&mut self.placement, incoming.placement);
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Visual attributes of an undirected parent-child (or legend) link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillEdge {
    pub width: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
}
