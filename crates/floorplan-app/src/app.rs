//! Headless application shell.

use crate::script::{Script, Step};
use floorplan_core::{
    ConfigError, EditorConfig, EditorError, EditorSession, EventOutcome, FileSink, KeyEvent,
    StorageError,
};
use floorplan_render::{
    ExportError, RenderContext, Renderer, RendererError, SkiaRenderer, export_jpeg,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
    #[error("Could not export the floor plan: {0}")]
    Export(#[from] ExportError),
    #[error("Could not write {}: {source}", path.display())]
    ExportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl AppError {
    /// Whether the run can carry on after this error, reporting it as a notice.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Export(_) | AppError::ExportWrite { .. } => true,
            AppError::Editor(e) => !matches!(e, EditorError::Save(_)),
            _ => false,
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Saved plan files.
    pub saved: Vec<PathBuf>,
    /// Exported JPEG files.
    pub exported: Vec<PathBuf>,
    /// User-facing notices for rejected actions.
    pub notices: Vec<String>,
    pub closed: bool,
}

/// One editor session wired to a renderer and an output directory.
pub struct App {
    session: EditorSession,
    renderer: SkiaRenderer,
    sink: FileSink,
    out_dir: PathBuf,
    summary: RunSummary,
}

impl App {
    pub fn new(
        script: &Script,
        config: EditorConfig,
        font: Option<Vec<u8>>,
        out_dir: &Path,
    ) -> Result<Self, AppError> {
        let session = EditorSession::with_config(
            script.branch_id.clone(),
            script.equipment_types.clone(),
            config,
        );
        let mut renderer = SkiaRenderer::new(script.width, script.height)?;
        if let Some(data) = font {
            renderer = renderer.with_font(data)?;
        }
        fs::create_dir_all(out_dir)?;
        let sink = FileSink::new(out_dir)?;

        let mut app = Self {
            session,
            renderer,
            sink,
            out_dir: out_dir.to_path_buf(),
            summary: RunSummary::default(),
        };
        app.redraw();
        Ok(app)
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn renderer(&self) -> &SkiaRenderer {
        &self.renderer
    }

    /// Apply one step. Rejected actions and failed exports become notices;
    /// save, I/O and setup failures abort the run.
    pub fn apply(&mut self, step: &Step) -> Result<(), AppError> {
        if self.summary.closed {
            log::warn!("Ignoring {:?}: session already closed", step);
            return Ok(());
        }
        let result = self.dispatch(step);
        match result {
            Ok(outcome) => {
                if outcome.needs_redraw() {
                    self.redraw();
                }
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("{}", e);
                self.summary.notices.push(e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, step: &Step) -> Result<EventOutcome, AppError> {
        let canvas = &mut self.session.canvas;
        let outcome = match step {
            Step::Down { x, y } => canvas.pointer_down((*x, *y).into())?,
            Step::Move { x, y } => canvas.pointer_move((*x, *y).into()),
            Step::Up { x, y } => canvas.pointer_up((*x, *y).into()),
            Step::Key { key, modifiers } => {
                canvas.handle_key_event(&KeyEvent::new(key.clone()).with_modifiers(*modifiers))
            }
            Step::Tool { tool } => {
                canvas.set_tool(*tool);
                EventOutcome::Changed
            }
            Step::Eraser { on } => {
                canvas.set_erasing(*on);
                EventOutcome::Changed
            }
            Step::EquipmentType { name } => {
                canvas.set_equipment_type(name)?;
                EventOutcome::Ignored
            }
            Step::TextDraft { text } => {
                canvas.set_text_draft(text)?;
                EventOutcome::Ignored
            }
            Step::TextConfirm => canvas.confirm_text()?,
            Step::TextCancel => {
                canvas.cancel_text();
                EventOutcome::Changed
            }
            Step::Undo => if canvas.undo() { EventOutcome::Recorded } else { EventOutcome::Ignored },
            Step::Redo => if canvas.redo() { EventOutcome::Recorded } else { EventOutcome::Ignored },
            Step::Name { name } => {
                self.session.set_name(name.clone());
                EventOutcome::Ignored
            }
            Step::Save => {
                self.save()?;
                EventOutcome::Ignored
            }
            Step::Export => {
                self.export()?;
                EventOutcome::Ignored
            }
            Step::Close => {
                self.summary.closed = true;
                EventOutcome::Ignored
            }
        };
        Ok(outcome)
    }

    /// Apply every step of `script`, then close the session.
    pub fn run(mut self, script: &Script) -> Result<RunSummary, AppError> {
        for step in &script.steps {
            self.apply(step)?;
        }
        let App {
            session,
            mut summary,
            ..
        } = self;
        session.close(|| summary.closed = true);
        Ok(summary)
    }

    fn redraw(&mut self) {
        let ctx = RenderContext::new(&self.session.canvas);
        self.renderer.build_scene(&ctx);
    }

    fn save(&mut self) -> Result<(), AppError> {
        self.session.save(&mut self.sink).map_err(|e| match e {
            EditorError::Save(source) => AppError::Storage(source),
            other => AppError::Editor(other),
        })?;
        if let Some(path) = self.sink.written().last() {
            self.summary.saved.push(path.clone());
        }
        Ok(())
    }

    fn export(&mut self) -> Result<(), AppError> {
        let image = export_jpeg(&self.renderer, &self.session.canvas, &self.session.name)?;
        let path = self.out_dir.join(&image.file_name);
        if let Err(source) = fs::write(&path, &image.bytes) {
            log::error!("Failed to write {}: {}", path.display(), source);
            return Err(AppError::ExportWrite { path, source });
        }
        log::info!("Exported floor plan to: {:?}", path);
        self.summary.exported.push(path);
        Ok(())
    }
}

/// Load a script, optional config and optional font from disk and run it.
pub fn run_files(
    script_path: &Path,
    out_dir: &Path,
    config_path: Option<&Path>,
    font_path: Option<&Path>,
) -> Result<RunSummary, AppError> {
    let script = Script::from_json(&fs::read_to_string(script_path)?)?;
    let config = match config_path {
        Some(path) => EditorConfig::from_json(&fs::read_to_string(path)?)?,
        None => EditorConfig::default(),
    };
    let font = font_path.map(fs::read).transpose()?;
    App::new(&script, config, font, out_dir)?.run(&script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::FloorPlan;
    use tempfile::tempdir;

    fn script(steps: &str) -> Script {
        Script::from_json(&format!(
            r#"{{ "branch_id": "branch-9", "equipment_types": ["Bait station", "Glue trap"],
                 "width": 120, "height": 90, "steps": [{steps}] }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_run_saves_and_exports() {
        let dir = tempdir().unwrap();
        let s = script(
            r#"{ "action": "down", "x": 10, "y": 10 },
               { "action": "down", "x": 100, "y": 10 },
               { "action": "key", "key": "Escape" },
               { "action": "tool", "tool": "Equipment" },
               { "action": "down", "x": 60, "y": 60 },
               { "action": "name", "name": "Main Floor" },
               { "action": "save" },
               { "action": "export" }"#,
        );
        let summary = App::new(&s, EditorConfig::default(), None, dir.path())
            .unwrap()
            .run(&s)
            .unwrap();

        assert!(summary.notices.is_empty());
        assert!(summary.closed);
        assert_eq!(summary.saved, vec![dir.path().join("Main_Floor.json")]);
        assert_eq!(summary.exported, vec![dir.path().join("Main Floor.jpg")]);

        let plan = FloorPlan::from_json(&fs::read_to_string(&summary.saved[0]).unwrap()).unwrap();
        assert_eq!(plan.branch_id, "branch-9");
        assert_eq!(plan.data.walls.len(), 1);
        assert_eq!(plan.data.equipment[0].number, 1);

        let jpeg = fs::read(&summary.exported[0]).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_rejections_become_notices() {
        let dir = tempdir().unwrap();
        let s = script(
            r#"{ "action": "save" },
               { "action": "equipment_type", "name": "Fogger" },
               { "action": "text_confirm" }"#,
        );
        let summary = App::new(&s, EditorConfig::default(), None, dir.path())
            .unwrap()
            .run(&s)
            .unwrap();
        assert_eq!(
            summary.notices,
            vec![
                "Enter a name for the floor plan before saving".to_string(),
                "Unknown equipment type: Fogger".to_string(),
                "No text entry is open".to_string(),
            ]
        );
        assert!(summary.saved.is_empty());
    }

    #[test]
    fn test_export_stays_inside_out_dir() {
        let root = tempdir().unwrap();
        let out = root.path().join("out");
        let s = script(
            r#"{ "action": "name", "name": "../escaped" },
               { "action": "export" },
               { "action": "name", "name": "Floor 1/2" },
               { "action": "export" },
               { "action": "down", "x": 5, "y": 5 }"#,
        );
        let mut app = App::new(&s, EditorConfig::default(), None, &out).unwrap();
        for step in &s.steps {
            app.apply(step).unwrap();
        }

        assert!(!root.path().join("escaped.jpg").exists());
        assert_eq!(
            app.summary.exported,
            vec![out.join("___escaped.jpg"), out.join("Floor 1_2.jpg")]
        );
        assert!(app.summary.exported.iter().all(|p| p.exists()));
        assert_eq!(app.session().canvas.scratch_wall().len(), 1);
    }

    #[test]
    fn test_failed_export_write_is_a_notice() {
        let dir = tempdir().unwrap();
        // A directory in the way makes the write fail
        fs::create_dir(dir.path().join("blocked.jpg")).unwrap();
        let s = script(
            r#"{ "action": "name", "name": "blocked" },
               { "action": "export" },
               { "action": "down", "x": 5, "y": 5 }"#,
        );
        let summary = App::new(&s, EditorConfig::default(), None, dir.path())
            .unwrap()
            .run(&s)
            .unwrap();

        assert!(summary.exported.is_empty());
        assert_eq!(summary.notices.len(), 1);
        assert!(summary.notices[0].starts_with("Could not write"), "{:?}", summary.notices);
        assert!(summary.closed);
    }

    #[test]
    fn test_sink_failure_aborts_run() {
        assert!(!AppError::Storage(StorageError::Io("disk full".into())).is_recoverable());
        assert!(!AppError::Editor(EditorError::Save(StorageError::Other("x".into()))).is_recoverable());
        assert!(AppError::Editor(EditorError::EmptyText).is_recoverable());
        assert!(AppError::Export(ExportError::Encode("bad".into())).is_recoverable());
    }

    #[test]
    fn test_live_frame_tracks_model() {
        let dir = tempdir().unwrap();
        let s = script(r#"{ "action": "tool", "tool": "Equipment" }"#);
        let mut app = App::new(&s, EditorConfig::default(), None, dir.path()).unwrap();
        app.apply(&Step::Down { x: 30.0, y: 30.0 }).unwrap();
        assert_eq!(app.renderer().pixel(23, 30), Some([220, 38, 38, 255]));

        app.apply(&Step::Undo).unwrap();
        assert_eq!(app.renderer().pixel(23, 30), Some([243, 244, 246, 255]));
    }

    #[test]
    fn test_steps_after_close_are_ignored() {
        let dir = tempdir().unwrap();
        let s = script(
            r#"{ "action": "close" },
               { "action": "down", "x": 5, "y": 5 }"#,
        );
        let mut app = App::new(&s, EditorConfig::default(), None, dir.path()).unwrap();
        for step in &s.steps {
            app.apply(step).unwrap();
        }
        assert!(app.session().canvas.scratch_wall().is_empty());
    }

    #[test]
    fn test_run_files_with_config() {
        let dir = tempdir().unwrap();
        let script_path = dir.path().join("script.json");
        let config_path = dir.path().join("config.json");
        fs::write(
            &script_path,
            r#"{ "branch_id": "b", "width": 16, "height": 16, "steps": [ { "action": "export" } ] }"#,
        )
        .unwrap();
        fs::write(&config_path, r#"{ "default_export_name": "draft" }"#).unwrap();

        let out = dir.path().join("out");
        let summary = run_files(&script_path, &out, Some(&config_path), None).unwrap();
        assert_eq!(summary.exported, vec![out.join("draft.jpg")]);
    }

    #[test]
    fn test_bad_config_is_reported() {
        let dir = tempdir().unwrap();
        let script_path = dir.path().join("script.json");
        let config_path = dir.path().join("config.json");
        fs::write(&script_path, r#"{ "branch_id": "b" }"#).unwrap();
        fs::write(&config_path, r#"{ "jpeg_quality": 0 }"#).unwrap();

        let err = run_files(&script_path, dir.path(), Some(&config_path), None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
