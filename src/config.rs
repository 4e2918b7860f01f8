use crate::fs::{FileSystem, default_fs};
use crate::model::{Category, Child, LeafGroup, SkillEdge, Taxonomy};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Reserved top-level key holding the rendering parameters.
pub const NETWORK_CONFIG_KEY: &str = "network_config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read skill file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse skill file: {0}")]
    Parse(#[from] serde_yaml_bw::Error),
    #[error("Invalid network_config: {0}")]
    Invalid(String),
    #[error("Invalid taxonomy at `{path}`: {reason}")]
    Shape { path: String, reason: String },
}

/// A fully loaded skill file.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillConfig {
    pub network: NetworkConfig,
    pub taxonomy: Taxonomy,
}

/// Rendering parameters from `network_config`.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub max_proficiency: u32,
    pub edge_width: f64,
    pub edge_color: String,
    pub smooth_edges: Option<bool>,
    /// Internal node size by depth. The last entry doubles as the maximum leaf size.
    pub nodes_sizes: Vec<f64>,
    /// Internal node colour by depth.
    pub internal_colors: Vec<String>,
    /// Leaf colour by proficiency level, level 1 first.
    pub leaf_colors: Vec<String>,
    pub bgcolor: String,
    pub font_color: String,
    pub title: String,
    pub legends: bool,
    /// Strip the first of the two heading blocks the page template emits.
    /// With this off the page shows the heading both above the page and as
    /// the canvas caption.
    pub dedupe_heading: bool,
    pub height: String,
    pub width: String,
    pub physics: Physics,
}

/// Repulsion solver constants passed through to the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub node_distance: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    pub spring_strength: f64,
    pub damping: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            node_distance: 100.0,
            central_gravity: 0.2,
            spring_length: 65.0,
            spring_strength: 0.05,
            damping: 0.09,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    network_config: RawNetworkConfig,
    #[serde(flatten)]
    categories: IndexMap<RawKey, RawSubtree>,
}

#[derive(Debug, Deserialize)]
struct RawNetworkConfig {
    max_proficiency: u32,
    edge_width: f64,
    edge_color: String,
    nodes_sizes: Vec<f64>,
    internal_colors: Vec<String>,
    leaf_colors: Vec<String>,
    bgcolor: String,
    font_color: String,
    title: String,
    legends: bool,
    smooth_edges: Option<bool>,
    dedupe_heading: Option<bool>,
    height: Option<String>,
    width: Option<String>,
    physics: Option<RawPhysics>,
}

#[derive(Debug, Deserialize)]
struct RawPhysics {
    node_distance: Option<f64>,
    central_gravity: Option<f64>,
    spring_length: Option<f64>,
    spring_strength: Option<f64>,
    damping: Option<f64>,
}

/// A mapping key: proficiency levels are integers, category names are strings.
/// Any other scalar (floats, booleans, null) is kept so errors can name it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
enum RawKey {
    Level(i64),
    Name(String),
    Other(serde_yaml_bw::Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSubtree {
    Leaves(Vec<RawLeaf>),
    Branch(IndexMap<RawKey, RawSubtree>),
    Empty,
    Invalid(serde_yaml_bw::Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLeaf {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKey::Level(n) => write!(f, "{}", n),
            RawKey::Name(s) => f.write_str(s),
            RawKey::Other(value) => {
                if let Some(x) = value.as_f64() {
                    write!(f, "{}", x)
                } else if let Some(b) = value.as_bool() {
                    write!(f, "{}", b)
                } else if value.is_null() {
                    f.write_str("~")
                } else {
                    f.write_str("?")
                }
            }
        }
    }
}

impl RawKey {
    /// Quoted integers (`"3": [...]`) count as levels too.
    fn level(&self) -> Option<i64> {
        match self {
            RawKey::Level(n) => Some(*n),
            RawKey::Name(s) => s.trim().parse().ok(),
            RawKey::Other(_) => None,
        }
    }
}

impl From<RawLeaf> for String {
    fn from(leaf: RawLeaf) -> Self {
        match leaf {
            RawLeaf::Text(s) => s,
            RawLeaf::Int(n) => n.to_string(),
            RawLeaf::Float(x) => x.to_string(),
            RawLeaf::Bool(b) => b.to_string(),
        }
    }
}

impl SkillConfig {
    /// Load a skill file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_fs(path, default_fs())
    }

    pub fn load_with_fs(path: &Path, fs: &dyn FileSystem) -> Result<Self, ConfigError> {
        let content = fs.read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            categories = config.taxonomy.category_count(),
            skills = config.taxonomy.leaf_count(),
            "loaded skill file"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawDocument = serde_yaml_bw::from_str(content)?;

        let network = NetworkConfig::from_raw(raw.network_config);
        network.validate()?;

        let taxonomy = Taxonomy::new(convert_top_level(raw.categories)?);

        Ok(Self { network, taxonomy })
    }
}

impl NetworkConfig {
    fn from_raw(raw: RawNetworkConfig) -> Self {
        let defaults = Physics::default();
        let physics = match raw.physics {
            Some(p) => Physics {
                node_distance: p.node_distance.unwrap_or(defaults.node_distance),
                central_gravity: p.central_gravity.unwrap_or(defaults.central_gravity),
                spring_length: p.spring_length.unwrap_or(defaults.spring_length),
                spring_strength: p.spring_strength.unwrap_or(defaults.spring_strength),
                damping: p.damping.unwrap_or(defaults.damping),
            },
            None => defaults,
        };

        Self {
            max_proficiency: raw.max_proficiency,
            edge_width: raw.edge_width,
            edge_color: raw.edge_color,
            smooth_edges: raw.smooth_edges,
            nodes_sizes: raw.nodes_sizes,
            internal_colors: raw.internal_colors,
            leaf_colors: raw.leaf_colors,
            bgcolor: raw.bgcolor,
            font_color: raw.font_color,
            title: raw.title,
            legends: raw.legends,
            dedupe_heading: raw.dedupe_heading.unwrap_or(true),
            height: raw.height.unwrap_or_else(|| "90%".to_string()),
            width: raw.width.unwrap_or_else(|| "100%".to_string()),
            physics,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_proficiency == 0 {
            return Err(ConfigError::Invalid(
                "max_proficiency must be at least 1".to_string(),
            ));
        }
        if self.nodes_sizes.is_empty() {
            return Err(ConfigError::Invalid(
                "nodes_sizes must list at least one size".to_string(),
            ));
        }
        if self.internal_colors.is_empty() {
            return Err(ConfigError::Invalid(
                "internal_colors must list at least one colour".to_string(),
            ));
        }
        if self.leaf_colors.len() < self.max_proficiency as usize {
            return Err(ConfigError::Invalid(format!(
                "leaf_colors has {} entries but max_proficiency is {}",
                self.leaf_colors.len(),
                self.max_proficiency
            )));
        }
        for (field, value) in [
            ("bgcolor", &self.bgcolor),
            ("font_color", &self.font_color),
            ("height", &self.height),
            ("width", &self.width),
        ] {
            if value.contains('<') {
                return Err(ConfigError::Invalid(format!(
                    "{} must not contain `<`: {:?}",
                    field, value
                )));
            }
        }
        Ok(())
    }

    /// Size of a leaf at the highest proficiency level.
    pub fn max_leaf_size(&self) -> Option<f64> {
        self.nodes_sizes.last().copied()
    }

    /// The one edge style shared by every link in the graph.
    pub fn edge_style(&self) -> SkillEdge {
        SkillEdge {
            width: self.edge_width,
            color: self.edge_color.clone(),
            smooth: self.smooth_edges,
        }
    }
}

fn convert_top_level(entries: IndexMap<RawKey, RawSubtree>) -> Result<Vec<Category>, ConfigError> {
    entries
        .into_iter()
        .map(|(key, value)| {
            let name = key.to_string();
            match value {
                RawSubtree::Branch(map) => {
                    let children = convert_children(map, &name)?;
                    Ok(Category { name, children })
                }
                RawSubtree::Empty => Ok(Category::new(name)),
                RawSubtree::Leaves(_) => Err(ConfigError::Shape {
                    path: name,
                    reason: "top-level entries must be categories, not skill lists".to_string(),
                }),
                RawSubtree::Invalid(value) => Err(invalid_value(name, &value)),
            }
        })
        .collect()
}

fn convert_children(
    entries: IndexMap<RawKey, RawSubtree>,
    parent_path: &str,
) -> Result<Vec<Child>, ConfigError> {
    let mut children = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        let path = format!("{}.{}", parent_path, key);
        let child = match value {
            RawSubtree::Branch(map) => Child::Category(Category {
                name: key.to_string(),
                children: convert_children(map, &path)?,
            }),
            RawSubtree::Leaves(leaves) => Child::Leaves(LeafGroup {
                level: parse_level(&key, &path)?,
                skills: leaves.into_iter().map(String::from).collect(),
            }),
            RawSubtree::Empty => match key.level() {
                Some(_) => Child::Leaves(LeafGroup {
                    level: parse_level(&key, &path)?,
                    skills: Vec::new(),
                }),
                None => Child::Category(Category::new(key.to_string())),
            },
            RawSubtree::Invalid(value) => return Err(invalid_value(path, &value)),
        };
        children.push(child);
    }

    Ok(children)
}

fn invalid_value(path: String, value: &serde_yaml_bw::Value) -> ConfigError {
    let found = if value.is_sequence() {
        "a list with a null or nested entry"
    } else if value.is_mapping() {
        "a mapping with unsupported values"
    } else {
        "a single scalar"
    };
    ConfigError::Shape {
        path,
        reason: format!(
            "expected a sub-category mapping or a list of skill names, found {}",
            found
        ),
    }
}

fn parse_level(key: &RawKey, path: &str) -> Result<u32, ConfigError> {
    let level = key.level().ok_or_else(|| ConfigError::Shape {
        path: path.to_string(),
        reason: "skill lists must be keyed by a proficiency level".to_string(),
    })?;

    u32::try_from(level).map_err(|_| ConfigError::Shape {
        path: path.to_string(),
        reason: format!("proficiency level {} is not a positive integer", level),
    })
}

/// Starter skill file written by `skilltree init`.
pub fn generate_config_template() -> String {
    r##"# Skill tree definition.
#
# Every top-level key except `network_config` is a category. Inside a
# category, a string key opens a sub-category and an integer key (1 up to
# max_proficiency) lists the skills held at that proficiency level.

network_config:
  max_proficiency: 5
  edge_width: 2
  edge_color: "#a0a0a0"
  # Internal node size by depth; the last entry is the size of a level-5 skill.
  nodes_sizes: [40, 30, 25]
  internal_colors: ["#e63946", "#f4a261", "#2a9d8f"]
  # Leaf colour for levels 1..max_proficiency.
  leaf_colors: ["#d8f3dc", "#95d5b2", "#52b788", "#2d6a4f", "#081c15"]
  bgcolor: "#222222"
  font_color: "white"
  title: "Skill Tree"
  legends: true
  # Optional:
  # smooth_edges: false
  # dedupe_heading: true
  # height: "90%"
  # width: "100%"
  # physics:
  #   node_distance: 100
  #   central_gravity: 0.2
  #   spring_length: 65
  #   spring_strength: 0.05
  #   damping: 0.09

Programming:
  Python:
    4: [pandas, numpy]
    2: [django]
  Rust:
    3: [tokio, serde]
  5: [bash]

Languages:
  5: [English]
  2: [German]
"##
    .to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    const NETWORK: &str = r##"
network_config:
  max_proficiency: 5
  edge_width: 2
  edge_color: "#cccccc"
  nodes_sizes: [40, 30, 30]
  internal_colors: ["#111111", "#222222", "#333333"]
  leaf_colors: ["#a1", "#a2", "#a3", "#a4", "#a5"]
  bgcolor: "#000000"
  font_color: "white"
  title: "Skills"
  legends: false
"##;

    fn load(taxonomy: &str) -> Result<SkillConfig, ConfigError> {
        SkillConfig::from_yaml(&format!("{}{}", NETWORK, taxonomy))
    }

    #[test]
    fn test_parse_nested_taxonomy() {
        let config = load("Programming:\n  Python:\n    3: [pandas, numpy]\n").unwrap();

        assert_eq!(config.network.max_proficiency, 5);
        assert_eq!(config.network.max_leaf_size(), Some(30.0));
        assert_eq!(
            config.taxonomy,
            Taxonomy::new(vec![Category::new("Programming").with_category(
                Category::new("Python").with_leaves(3, ["pandas", "numpy"])
            )])
        );
    }

    #[test]
    fn test_preserves_document_order_and_mixed_keys() {
        let config = load(
            "Zeta:\n  2: [z1]\n  Sub:\n    1: [s1]\n  5: [z5]\nAlpha:\n  1: [a1]\n",
        )
        .unwrap();

        let names: Vec<_> = config
            .taxonomy
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Zeta", "Alpha"]);

        let zeta = &config.taxonomy.categories[0];
        assert_eq!(zeta.children.len(), 3);
        assert!(matches!(&zeta.children[0], Child::Leaves(g) if g.level == 2));
        assert!(matches!(&zeta.children[1], Child::Category(c) if c.name == "Sub"));
        assert!(matches!(&zeta.children[2], Child::Leaves(g) if g.level == 5));
    }

    #[test]
    fn test_quoted_level_and_scalar_leaves() {
        let config = load("Dates:\n  \"4\": [2024, true, plain]\n").unwrap();
        let dates = &config.taxonomy.categories[0];
        assert_eq!(
            dates.children,
            vec![Child::Leaves(LeafGroup {
                level: 4,
                skills: vec!["2024".into(), "true".into(), "plain".into()],
            })]
        );
    }

    #[test]
    fn test_integer_key_with_mapping_is_category() {
        let config = load("History:\n  1990:\n    2: [grunge]\n").unwrap();
        let history = &config.taxonomy.categories[0];
        assert!(matches!(&history.children[0], Child::Category(c) if c.name == "1990"));
    }

    #[test]
    fn test_empty_values() {
        let config = load("Empty:\nHobbies:\n  Chess: {}\n  3:\n").unwrap();
        assert_eq!(config.taxonomy.categories[0], Category::new("Empty"));
        let hobbies = &config.taxonomy.categories[1];
        assert_eq!(
            hobbies.children,
            vec![
                Child::Category(Category::new("Chess")),
                Child::Leaves(LeafGroup {
                    level: 3,
                    skills: vec![],
                }),
            ]
        );
    }

    #[test]
    fn test_only_network_config() {
        let config = load("").unwrap();
        assert!(config.taxonomy.is_empty());
    }

    #[test]
    fn test_missing_network_config() {
        let err = SkillConfig::from_yaml("Programming:\n  3: [rust]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
    }

    #[test]
    fn test_missing_required_network_key() {
        let yaml = NETWORK.replace("  legends: false\n", "");
        let err = SkillConfig::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("legends"), "{}", err);
    }

    #[test]
    fn test_named_key_with_list_is_shape_error() {
        let err = load("Programming:\n  Python: [pandas]\n").unwrap_err();
        match err {
            ConfigError::Shape { path, .. } => assert_eq!(path, "Programming.Python"),
            other => panic!("expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_level_is_shape_error() {
        let err = load("Programming:\n  -1: [pandas]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Shape { .. }), "got {:?}", err);
    }

    #[test]
    fn test_top_level_list_is_shape_error() {
        let err = load("Programming: [rust]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Shape { path, .. } if path == "Programming"));
    }

    #[test]
    fn test_malformed_values_name_their_path() {
        let cases = [
            ("Programming:\n  3: rust\n", "Programming.3"),
            ("Programming:\n  3.5: [rust]\n", "Programming.3.5"),
            ("Programming:\n  3: [~]\n", "Programming.3"),
            ("Programming:\n  Python:\n    2: [[nested]]\n", "Programming.Python.2"),
            ("Programming: rust\n", "Programming"),
        ];
        for (taxonomy, expected) in cases {
            match load(taxonomy) {
                Err(ConfigError::Shape { path, .. }) => {
                    assert_eq!(path, expected, "{}", taxonomy)
                }
                other => panic!("expected shape error for {:?}, got {:?}", taxonomy, other),
            }
        }
    }

    #[test]
    fn test_markup_in_style_values_is_rejected() {
        let bg = NETWORK.replace(r##"bgcolor: "#000000""##, r##"bgcolor: "red</style>""##);
        let err = SkillConfig::from_yaml(&bg).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("bgcolor")));

        let height = format!("{}  height: \"<b>\"\n", NETWORK);
        assert!(matches!(
            SkillConfig::from_yaml(&height),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_validation() {
        let zero = NETWORK.replace("max_proficiency: 5", "max_proficiency: 0");
        assert!(matches!(
            SkillConfig::from_yaml(&zero),
            Err(ConfigError::Invalid(_))
        ));

        let few_colors =
            NETWORK.replace(r##"["#a1", "#a2", "#a3", "#a4", "#a5"]"##, r##"["#a1"]"##);
        let err = SkillConfig::from_yaml(&few_colors).unwrap_err();
        assert!(err.to_string().contains("leaf_colors has 1 entries"), "{}", err);

        let no_sizes = NETWORK.replace("[40, 30, 30]", "[]");
        assert!(matches!(
            SkillConfig::from_yaml(&no_sizes),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_optional_network_settings() {
        let config = load("").unwrap();
        assert!(config.network.dedupe_heading);
        assert_eq!(config.network.height, "90%");
        assert_eq!(config.network.width, "100%");
        assert_eq!(config.network.smooth_edges, None);
        assert_eq!(config.network.physics, Physics::default());

        let yaml = NETWORK.replace(
            "  legends: false\n",
            "  legends: false\n  smooth_edges: true\n  dedupe_heading: false\n  physics:\n    damping: 0.5\n",
        );
        let config = SkillConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.network.smooth_edges, Some(true));
        assert!(!config.network.dedupe_heading);
        assert_eq!(config.network.physics.damping, 0.5);
        assert_eq!(config.network.physics.node_distance, 100.0);
        assert_eq!(config.network.edge_style().smooth, Some(true));
    }

    #[test]
    fn test_template_loads() {
        let config = SkillConfig::from_yaml(&generate_config_template()).unwrap();
        assert!(config.network.legends);
        assert_eq!(config.taxonomy.categories.len(), 2);
        assert_eq!(config.taxonomy.leaf_count(), 8);
    }

    #[test]
    fn test_load_with_fs_reports_missing_file() {
        let fs = crate::fs::mock::MockFs::new();
        let err = SkillConfig::load_with_fs(Path::new("/missing.yml"), &fs).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
