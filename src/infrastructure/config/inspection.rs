//! 적용 설정 진단(inspection) 뷰 모델.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use super::resolver::ResolverState;

/// 값이 어느 계층에서 왔는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingSource {
    Override,
    File,
    Default,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_path: Option<String>,
    pub state: ResolverState,
    pub settings: BTreeMap<String, InspectedSetting>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectedSetting {
    pub value: Value,
    pub source: SettingSource,
}

impl ConfigInspection {
    pub(crate) fn new(
        searched_paths: Vec<PathBuf>,
        loaded_path: Option<PathBuf>,
        state: ResolverState,
        settings: Vec<(String, Value, SettingSource)>,
    ) -> Self {
        Self {
            searched_paths: searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_path: loaded_path.map(|p| p.display().to_string()),
            state,
            settings: settings
                .into_iter()
                .map(|(key, value, source)| (key, InspectedSetting { value, source }))
                .collect(),
        }
    }

    /// 사람이 읽기 쉬운 JSON으로 직렬화한다.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
