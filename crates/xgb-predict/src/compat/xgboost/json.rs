//! XGBoost JSON field extraction.
//!
//! The document is parsed into a [`serde_json::Value`] once and then walked
//! with [`Field`], which remembers the dotted path of every value it visits so
//! that errors can name exactly which field was absent or mistyped
//! (e.g. `learner.gradient_booster.model.trees[3].left_children[7]`).
//!
//! These are "foreign types" mirroring the file layout; conversion to the
//! native representation lives in the `convert` module.

use serde_json::Value;

use super::LoadError;

// =============================================================================
// Field walker
// =============================================================================

/// A JSON value together with its path from the document root.
#[derive(Debug, Clone)]
struct Field<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Field<'a> {
    fn root(value: &'a Value) -> Result<Self, LoadError> {
        if !value.is_object() {
            return Err(LoadError::not_an_object());
        }
        Ok(Self {
            value,
            path: String::new(),
        })
    }

    fn malformed(&self, expected: &'static str) -> LoadError {
        LoadError::MalformedField {
            path: self.path.clone(),
            expected,
        }
    }

    /// Child field of an object.
    fn get(&self, key: &str) -> Result<Field<'a>, LoadError> {
        let object = self.value.as_object().ok_or_else(|| self.malformed("an object"))?;
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        };
        match object.get(key) {
            Some(value) => Ok(Field { value, path }),
            None => Err(LoadError::MissingField { path }),
        }
    }

    /// Elements of an array.
    fn items(&self) -> Result<impl Iterator<Item = Field<'a>> + '_, LoadError> {
        let items = self.value.as_array().ok_or_else(|| self.malformed("an array"))?;
        Ok(items.iter().enumerate().map(move |(i, value)| Field {
            value,
            path: format!("{}[{}]", self.path, i),
        }))
    }

    fn as_str(&self) -> Result<&'a str, LoadError> {
        self.value.as_str().ok_or_else(|| self.malformed("a string"))
    }

    /// Booleans; XGBoost >= 2.0 may write them as integers 0 and 1.
    fn as_bool(&self) -> Result<bool, LoadError> {
        match self.value {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(self.malformed("a boolean")),
            },
            _ => Err(self.malformed("a boolean")),
        }
    }

    fn as_i32(&self) -> Result<i32, LoadError> {
        self.value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| self.malformed("a 32-bit integer"))
    }

    fn as_f32(&self) -> Result<f32, LoadError> {
        self.value
            .as_f64()
            .map(|n| n as f32)
            .ok_or_else(|| self.malformed("a number"))
    }

    fn array_of<T>(
        &self,
        key: &str,
        element: impl Fn(&Field<'a>) -> Result<T, LoadError>,
    ) -> Result<Vec<T>, LoadError> {
        let field = self.get(key)?;
        let items = field.items()?;
        items.map(|item| element(&item)).collect()
    }
}

/// Parse a base score string: a plain float (`"5E-1"`) or a single float in
/// brackets (`"[5E-1]"`).
fn parse_base_score(text: &str) -> Option<f32> {
    let text = text.trim();
    let inner = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text);
    inner.trim().parse().ok()
}

// =============================================================================
// Model types
// =============================================================================

/// The five parallel node arrays of one XGBoost tree.
///
/// Index `i` of every array describes node `i`; a negative
/// `left_children[i]` marks a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct XgbTree {
    pub default_left: Vec<bool>,
    pub left_children: Vec<i32>,
    pub right_children: Vec<i32>,
    pub split_indices: Vec<i32>,
    pub split_conditions: Vec<f32>,
}

impl XgbTree {
    fn from_field(field: &Field<'_>, tree: usize) -> Result<Self, LoadError> {
        let parsed = Self {
            default_left: field.array_of("default_left", Field::as_bool)?,
            left_children: field.array_of("left_children", Field::as_i32)?,
            right_children: field.array_of("right_children", Field::as_i32)?,
            split_indices: field.array_of("split_indices", Field::as_i32)?,
            split_conditions: field.array_of("split_conditions", Field::as_f32)?,
        };

        let lengths = parsed.lengths();
        if lengths.iter().any(|&len| len != lengths[0]) {
            return Err(LoadError::ArrayLengthMismatch { tree, lengths });
        }
        Ok(parsed)
    }

    /// Array lengths in file order: `default_left`, `left_children`,
    /// `right_children`, `split_indices`, `split_conditions`.
    pub fn lengths(&self) -> [usize; 5] {
        [
            self.default_left.len(),
            self.left_children.len(),
            self.right_children.len(),
            self.split_indices.len(),
            self.split_conditions.len(),
        ]
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.split_conditions.len()
    }
}

/// The inference-relevant content of an XGBoost JSON model.
#[derive(Debug, Clone, PartialEq)]
pub struct XgbModel {
    pub trees: Vec<XgbTree>,
    /// Output group id of each tree.
    pub tree_info: Vec<i32>,
    /// `learner.objective.name`.
    pub objective: String,
    /// Base score as written in the file, before any remapping.
    pub base_score: f32,
}

impl XgbModel {
    /// Extract the model fields from a parsed JSON document.
    pub fn from_value(value: &Value) -> Result<Self, LoadError> {
        let root = Field::root(value)?;
        let learner = root.get("learner")?;
        let booster = learner.get("gradient_booster")?.get("model")?;

        let trees = booster
            .get("trees")?
            .items()?
            .enumerate()
            .map(|(i, tree)| XgbTree::from_field(&tree, i))
            .collect::<Result<Vec<_>, _>>()?;

        let tree_info = booster.array_of("tree_info", Field::as_i32)?;

        let objective = learner.get("objective")?.get("name")?.as_str()?.to_string();

        let base_score_field = learner.get("learner_model_param")?.get("base_score")?;
        let base_score = parse_base_score(base_score_field.as_str()?)
            .ok_or_else(|| base_score_field.malformed("a string holding a float"))?;

        Ok(Self {
            trees,
            tree_info,
            objective,
            base_score,
        })
    }
}
