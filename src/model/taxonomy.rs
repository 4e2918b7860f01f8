/// The skill hierarchy below `network_config`, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Taxonomy {
    pub categories: Vec<Category>,
}

/// An internal node of the taxonomy.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Category(Category),
    Leaves(LeafGroup),
}

/// Skills listed under one proficiency level.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafGroup {
    pub level: u32,
    pub skills: Vec<String>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories at every depth.
    pub fn category_count(&self) -> usize {
        self.categories.iter().map(Category::category_count).sum()
    }

    /// Number of leaf entries at every depth (duplicates counted separately).
    pub fn leaf_count(&self) -> usize {
        self.categories.iter().map(Category::leaf_count).sum()
    }
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.children.push(Child::Category(category));
        self
    }

    pub fn with_leaves<I, S>(mut self, level: u32, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.push(Child::Leaves(LeafGroup {
            level,
            skills: skills.into_iter().map(Into::into).collect(),
        }));
        self
    }

    fn category_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                Child::Category(c) => c.category_count(),
                Child::Leaves(_) => 0,
            })
            .sum::<usize>()
    }

    fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Child::Category(c) => c.leaf_count(),
                Child::Leaves(group) => group.skills.len(),
            })
            .sum()
    }
}
