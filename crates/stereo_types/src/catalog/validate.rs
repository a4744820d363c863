//! Runtime view of the alias table and its consistency checks

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use super::{naming, AliasEntry, Category, Signature, ALIASES};
use crate::config::ValidationConfig;
use crate::foundation::scalar::ScalarKind;

/// Scalar kinds and dimensions every category must provide
struct Requirement {
    category: Category,
    scalars: &'static [ScalarKind],
    dims: &'static [Option<usize>],
}

const PLANAR_AND_SPATIAL: &[Option<usize>] = &[Some(2), Some(3)];

const REQUIRED: &[Requirement] = &[
    Requirement {
        category: Category::Vector,
        scalars: &ScalarKind::ALL,
        dims: &[Some(2), Some(3), Some(4)],
    },
    Requirement {
        category: Category::Range,
        scalars: &[ScalarKind::F32, ScalarKind::F64, ScalarKind::I32, ScalarKind::U32, ScalarKind::U64],
        dims: &[Some(1), Some(2), Some(3), Some(4)],
    },
    Requirement {
        category: Category::OrientedBox,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
    Requirement {
        category: Category::AffineBox,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
    Requirement {
        category: Category::Quaternion,
        scalars: &ScalarKind::FLOATS,
        dims: &[None],
    },
    Requirement {
        category: Category::AffineTransform,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
    Requirement {
        category: Category::Matrix,
        scalars: &ScalarKind::FLOATS,
        dims: &[Some(2), Some(3), Some(4)],
    },
    Requirement {
        category: Category::Ray,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
    Requirement {
        category: Category::Sphere,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
    Requirement {
        category: Category::Cylinder,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
    Requirement {
        category: Category::Capsule,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
    Requirement {
        category: Category::RoundedRect,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
    Requirement {
        category: Category::Frustum,
        scalars: &ScalarKind::FLOATS,
        dims: &[Some(3)],
    },
    Requirement {
        category: Category::Simplex,
        scalars: &ScalarKind::FLOATS,
        dims: PLANAR_AND_SPATIAL,
    },
];

/// Every specialization the catalog is required to name
pub fn required_specializations() -> impl Iterator<Item = Signature> {
    REQUIRED.iter().flat_map(|req| {
        req.scalars.iter().flat_map(move |&scalar| {
            req.dims.iter().map(move |&dim| Signature::new(req.category, scalar, dim))
        })
    })
}

/// Catalog consistency errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share a name
    #[error("Duplicate alias name: {name}")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// Two names resolve to the same specialization
    #[error("Aliases {first} and {second} both name the {signature}")]
    DuplicateSpecialization {
        /// Earlier name
        first: String,
        /// Later name
        second: String,
        /// What both resolve to
        signature: Signature,
    },

    /// A name does not encode what it resolves to
    #[error(
        "Alias {name} resolves to the {signature} and should be named {}",
        .expected.as_deref().unwrap_or("<no conventional name>")
    )]
    NameMismatch {
        /// The offending name
        name: String,
        /// What it resolves to
        signature: Signature,
        /// The conventional name for that specialization
        expected: Option<String>,
    },

    /// Required specializations with no alias
    #[error("{} required specializations have no alias", .missing.len())]
    CoverageGap {
        /// The missing specializations
        missing: Vec<Signature>,
    },

    /// Names removed or re-bound relative to an older manifest
    #[error("Breaking alias change: removed {removed:?}, changed {changed:?}")]
    BreakingChange {
        /// Names no longer present
        removed: Vec<String>,
        /// Names now resolving to something else
        changed: Vec<String>,
    },
}

/// Queryable view over an alias table
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    entries: &'a [AliasEntry],
}

impl Catalog<'static> {
    /// The aliases compiled into this crate
    pub fn builtin() -> Self {
        Self::new(ALIASES)
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Catalog<'a> {
    /// View an arbitrary alias table
    pub const fn new(entries: &'a [AliasEntry]) -> Self {
        Self { entries }
    }

    /// All entries in declaration order
    pub const fn entries(&self) -> &'a [AliasEntry] {
        self.entries
    }

    /// Number of aliases
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an alias by name
    pub fn lookup(&self, name: &str) -> Option<&'a AliasEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Find the alias for a specialization
    pub fn find(&self, category: Category, scalar: ScalarKind, dim: Option<usize>) -> Option<&'a AliasEntry> {
        let wanted = Signature::new(category, scalar, dim);
        self.entries.iter().find(|entry| entry.signature() == wanted)
    }

    /// All aliases of one category
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &'a AliasEntry> + 'a {
        let entries = self.entries;
        entries.iter().filter(move |entry| entry.category == category)
    }

    /// Required specializations that have no alias
    pub fn coverage_gaps(&self) -> Vec<Signature> {
        let present: HashSet<Signature> = self.entries.iter().map(AliasEntry::signature).collect();
        required_specializations()
            .filter(|signature| !present.contains(signature))
            .collect()
    }

    /// Check the table for duplicates, misnamed entries and missing coverage
    pub fn validate(&self, config: &ValidationConfig) -> Result<(), CatalogError> {
        debug!("Validating {} aliases ({:?})", self.entries.len(), config);

        let mut names = HashSet::with_capacity(self.entries.len());
        let mut signatures: HashMap<Signature, &str> = HashMap::with_capacity(self.entries.len());

        for entry in self.entries {
            let signature = entry.signature();

            if !names.insert(entry.name) {
                return Err(CatalogError::DuplicateName {
                    name: entry.name.to_string(),
                });
            }

            if let Some(first) = signatures.insert(signature, entry.name) {
                return Err(CatalogError::DuplicateSpecialization {
                    first: first.to_string(),
                    second: entry.name.to_string(),
                    signature,
                });
            }

            if config.check_names {
                let expected = naming::encode_signature(signature);
                if expected.as_deref() != Some(entry.name) || naming::decode(entry.name) != Some(signature) {
                    return Err(CatalogError::NameMismatch {
                        name: entry.name.to_string(),
                        signature,
                        expected,
                    });
                }
            }

            trace!("{entry}");
        }

        if config.require_full_coverage {
            let missing = self.coverage_gaps();
            if !missing.is_empty() {
                return Err(CatalogError::CoverageGap { missing });
            }
        }

        debug!("Alias catalog is consistent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::aliases::{Range2d, Vec3, Vec3ub};
    use crate::geometry::Sphere;

    fn strict() -> ValidationConfig {
        ValidationConfig::default()
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), required_specializations().count());
        assert!(catalog.coverage_gaps().is_empty());
        assert_eq!(catalog.validate(&strict()), Ok(()));
    }

    #[test]
    fn test_queries() {
        let catalog = Catalog::builtin();
        let entry = catalog.lookup("Range2d").expect("Range2d is catalogued");
        assert_eq!(entry.scalar, ScalarKind::F64);
        assert_eq!(entry.dim, Some(2));

        let quat = catalog.find(Category::Quaternion, ScalarKind::F64, None).expect("Quatd is catalogued");
        assert_eq!(quat.name, "Quatd");

        assert_eq!(catalog.by_category(Category::Vector).count(), 18);
        assert_eq!(catalog.by_category(Category::Range).count(), 20);
        assert!(catalog.lookup("Vec5").is_none());
    }

    #[test]
    fn test_duplicate_name() {
        let entries = [
            AliasEntry::of::<Vec3>("Vec3"),
            AliasEntry::of::<Vec3ub>("Vec3"),
        ];
        let result = Catalog::new(&entries).validate(&strict());
        assert!(matches!(result, Err(CatalogError::DuplicateName { name }) if name == "Vec3"));
    }

    #[test]
    fn test_duplicate_specialization() {
        let entries = [
            AliasEntry::of::<Vec3>("Vec3"),
            AliasEntry::of::<Vec3>("Float3"),
        ];
        let result = Catalog::new(&entries).validate(&strict());
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateSpecialization { first, second, .. }) if first == "Vec3" && second == "Float3"
        ));
    }

    #[test]
    fn test_name_mismatch() {
        let entries = [AliasEntry::of::<Range2d>("Range2")];
        let config = ValidationConfig {
            require_full_coverage: false,
            check_names: true,
        };
        let err = Catalog::new(&entries).validate(&config).expect_err("name encodes f32");
        assert_eq!(
            err,
            CatalogError::NameMismatch {
                name: "Range2".to_string(),
                signature: Signature::new(Category::Range, ScalarKind::F64, Some(2)),
                expected: Some("Range2d".to_string()),
            }
        );
        assert_eq!(
            err.to_string(),
            "Alias Range2 resolves to the 2D range of f64 and should be named Range2d"
        );
    }

    #[test]
    fn test_unconventional_names_allowed_when_unchecked() {
        let entries = [AliasEntry::of::<Sphere<f32, 3>>("Ball")];
        let config = ValidationConfig {
            require_full_coverage: false,
            check_names: false,
        };
        assert_eq!(Catalog::new(&entries).validate(&config), Ok(()));
    }

    #[test]
    fn test_coverage_gap() {
        let partial = &ALIASES[..10];
        let catalog = Catalog::new(partial);
        let gaps = catalog.coverage_gaps();
        assert_eq!(gaps.len(), ALIASES.len() - 10);
        assert!(gaps.contains(&Signature::new(Category::Quaternion, ScalarKind::F32, None)));

        let result = catalog.validate(&strict());
        assert!(matches!(result, Err(CatalogError::CoverageGap { missing }) if missing == gaps));
    }
}
