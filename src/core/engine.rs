use crate::core::layout;
use crate::core::pipeline::GitHubPipeline;
use crate::domain::model::{Identity, Profile, RenderedProfileText, TextArtBlock};
use crate::domain::ports::{ConfigProvider, IdentityProvider, LayoutMode, Pipeline};
use crate::utils::error::{ErrorSeverity, Result, WhoArtError};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Identity,
    Profile,
    Art,
}

#[derive(Debug)]
pub struct StageFailure {
    pub stage: Stage,
    pub error: WhoArtError,
}

/// 一次執行的結果；失敗已記錄，不會中斷整個流程
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub identity: Option<Identity>,
    pub profile: Option<Profile>,
    pub art: Option<TextArtBlock>,
    pub text: Option<RenderedProfileText>,
    pub failures: Vec<StageFailure>,
    pub lines_printed: usize,
}

impl RunOutcome {
    fn record(&mut self, stage: Stage, error: WhoArtError) {
        tracing::error!(
            "❌ {:?} stage failed: {} (Category: {:?}, Severity: {:?})",
            stage,
            error,
            error.category(),
            error.severity()
        );
        tracing::info!("💡 {}", error.recovery_suggestion());
        self.failures.push(StageFailure { stage, error });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn worst_severity(&self) -> Option<ErrorSeverity> {
        self.failures.iter().map(|f| f.error.severity()).max()
    }

    /// 預設永遠回傳 0；strict 模式才依嚴重程度決定
    pub fn exit_code(&self, strict: bool) -> i32 {
        if !strict {
            return 0;
        }
        match self.worst_severity() {
            None | Some(ErrorSeverity::Low) => 0,
            Some(ErrorSeverity::Medium) => 2,
            Some(ErrorSeverity::High) => 1,
            Some(ErrorSeverity::Critical) => 3,
        }
    }
}

pub struct DisplayOptions {
    pub layout: LayoutMode,
    pub separator: String,
    pub color: bool,
}

impl DisplayOptions {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            layout: config.layout(),
            separator: config.separator().to_string(),
            color: config.color(),
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            layout: LayoutMode::SideBySide,
            separator: layout::DEFAULT_SEPARATOR.to_string(),
            color: true,
        }
    }
}

pub struct WhoArtEngine<P: Pipeline> {
    pipeline: P,
    display: DisplayOptions,
}

impl<P: Pipeline> WhoArtEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::with_display(pipeline, DisplayOptions::default())
    }

    pub fn with_display(pipeline: P, display: DisplayOptions) -> Self {
        Self { pipeline, display }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// 只有寫入輸出失敗才會回傳 Err
    pub async fn run<W: Write + Send>(&self, out: &mut W) -> Result<RunOutcome> {
        let mut outcome = RunOutcome::default();

        // Identity
        let identity = match self.pipeline.resolve_identity() {
            Ok(identity) => identity,
            Err(e) => {
                outcome.record(Stage::Identity, e);
                return Ok(outcome);
            }
        };
        writeln!(out, "{}", layout::identity_line(&identity, self.display.color))?;
        outcome.identity = Some(identity.clone());

        // Profile
        let profile = match self.pipeline.fetch_profile(&identity).await {
            Ok(profile) => profile,
            Err(e) => {
                outcome.record(Stage::Profile, e);
                return Ok(outcome);
            }
        };
        tracing::debug!("Fetched profile for {}", profile.username);

        // Art
        let art = match self.pipeline.render_art(&profile).await {
            Ok(art) => Some(art),
            Err(e) => {
                outcome.record(Stage::Art, e);
                None
            }
        };

        let mut text = self.pipeline.format_profile(&profile);
        if let Some(stats) = self.pipeline.host_stats() {
            text.extend(layout::host_stats_lines(&stats, self.display.color));
        }

        let lines = layout::compose(
            art.as_ref(),
            Some(&text),
            self.display.layout,
            &self.display.separator,
            self.display.color,
        );
        for line in &lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        outcome.lines_printed = lines.len();
        outcome.profile = Some(profile);
        outcome.art = art;
        outcome.text = Some(text);
        Ok(outcome)
    }
}

impl<I: IdentityProvider, C: ConfigProvider> WhoArtEngine<GitHubPipeline<I, C>> {
    /// 顯示設定一律取自 pipeline 的 ConfigProvider
    pub fn from_config(pipeline: GitHubPipeline<I, C>) -> Self {
        let display = DisplayOptions::from_config(pipeline.config());
        Self::with_display(pipeline, display)
    }

    pub fn strict_exit(&self) -> bool {
        self.pipeline.config().strict_exit()
    }
}
