//! Skill catalog loader.

use std::path::Path;

use battle_core::{EffectKind, SkillDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Skill catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<SkillDefinition>,
}

/// Loader for skill definitions from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load skill definitions from a RON file.
    ///
    /// Buff effects must name the stat they modify.
    pub fn load(path: &Path) -> LoadResult<Vec<SkillDefinition>> {
        let content = read_file(path)?;
        let catalog: SkillCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        ensure_unique_ids("skill", catalog.skills.iter().map(|s| s.id.as_str()))?;
        for skill in &catalog.skills {
            if skill.effect.kind == EffectKind::Buff && skill.effect.buff_stat.is_none() {
                anyhow::bail!("Buff skill '{}' has no buff_stat", skill.id);
            }
        }

        tracing::debug!(count = catalog.skills.len(), path = %path.display(), "loaded skills");
        Ok(catalog.skills)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::{Element, StatKind, Status};
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn loads_effects_and_riders() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                skills: [
                    (
                        id: "frost_lance",
                        name: "Frost Lance",
                        rp_cost: 20,
                        effect: (kind: damage, value: 12, element: Some(ice), status: Some((status: freeze, turns: 1))),
                    ),
                    (
                        id: "rally",
                        name: "Rally",
                        effect: (kind: buff, value: 4, buff_stat: Some(attack), duration: 3),
                    ),
                ],
            )"#
        )
        .unwrap();

        let skills = SkillLoader::load(file.path()).unwrap();
        assert_eq!(skills.len(), 2);

        let lance = &skills[0];
        assert_eq!(lance.rp_cost, 20);
        assert_eq!(lance.effect.element, Some(Element::Ice));
        assert_eq!(lance.effect.status.map(|r| r.status), Some(Status::Freeze));

        let rally = &skills[1];
        assert_eq!(rally.rp_cost, 0);
        assert_eq!(rally.effect.buff_stat, Some(StatKind::Attack));
        assert_eq!(rally.effect.duration, 3);
    }

    #[test]
    fn rejects_buffs_without_a_stat() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(skills: [(id: "rally", name: "Rally", effect: (kind: buff, value: 4, duration: 3))])"#
        )
        .unwrap();

        let err = SkillLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Buff skill 'rally'"));
    }
}
