#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    BlockCritical,
    BlockHigh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableAction {
    Continue,
    ContinueWithWarning,
    Abort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableTier {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl RenderableTier {
    pub fn label(self) -> &'static str {
        match self {
            RenderableTier::Critical => "Critical",
            RenderableTier::High => "High",
            RenderableTier::Medium => "Medium",
            RenderableTier::Low => "Low",
            RenderableTier::None => "None",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderableCounts {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub none: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableFinding {
    pub tier: RenderableTier,
    pub level: String,
    pub score: f64,
    pub rule_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub status: RenderableStatus,
    pub action: RenderableAction,
    pub image: String,
    pub branch: String,
    pub protected: bool,
    pub counts: RenderableCounts,
    pub findings_total: u32,
    pub degraded_input: bool,
    pub dark_data_fallback: bool,
    pub reasons: Vec<String>,
    pub findings: Vec<RenderableFinding>,
}
