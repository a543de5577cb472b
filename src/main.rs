use iced::time::Instant;
use iced::widget::image::Handle;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::time::Duration;

mod camera;
mod state;
mod ui;

use camera::frame::Frame;
use camera::source::FrameSource;
use state::capture::{snapshot_filename, AngleCounter};
use state::data::CapturedImage;
use state::settings::Settings;
use state::store::CaptureStore;

/// Delay between preview ticks; each tick pulls at most one frame
const PREVIEW_DELAY: Duration = Duration::from_millis(15);

/// Main application state
struct CamCapture {
    /// The open camera device
    source: FrameSource,
    /// The save directory
    store: CaptureStore,
    /// Persisted UI settings
    settings: Settings,
    /// In-memory mirror of the store's contents
    captured: Vec<CapturedImage>,
    /// Index of the selected browser row, if any
    selected: Option<usize>,
    /// Current contents of the filename prefix field
    prefix: String,
    /// Cycling filename suffix
    angle: AngleCounter,
    /// Most recent preview frame, ready for display
    preview: Option<Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Preview timer fired; pull and display one frame
    Tick(Instant),
    /// User edited the filename prefix field
    PrefixChanged(String),
    /// User clicked "Capture Image"
    Snapshot,
    /// Background snapshot write completed
    SnapshotSaved(Result<CapturedImage, String>),
    /// User selected a browser row
    Select(usize),
    /// User clicked "Open" on the selected row
    OpenImage(usize),
    /// User clicked "Delete" on the selected row
    DeleteImage(usize),
    /// User clicked "Refresh"
    Refresh,
    /// User clicked "Change Folder..."
    ChangeFolder,
}

impl CamCapture {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let directory = settings
            .save_directory
            .clone()
            .unwrap_or_else(CaptureStore::default_directory);

        let store = CaptureStore::new(directory)
            .expect("Failed to prepare the save directory. Check permissions and disk space.");

        // If this fails, we exit with a clear message: previewing without
        // a camera is the one thing the app cannot do.
        let source = FrameSource::open(0)
            .expect("Failed to open the webcam. Is a camera connected and not in use?");

        let prefix = settings.prefix.clone();

        let mut app = CamCapture {
            source,
            store,
            settings,
            captured: Vec::new(),
            selected: None,
            prefix,
            angle: AngleCounter::new(),
            preview: None,
            status: String::new(),
        };
        app.reload();

        println!(
            "📁 Saving captures to: {}",
            app.store.directory().display()
        );

        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(_) => {
                match self.source.read_frame() {
                    Ok(Some(frame)) => {
                        self.preview = Some(Handle::from_rgba(
                            frame.width(),
                            frame.height(),
                            frame.to_rgba_bytes(),
                        ));
                    }
                    // No frame this instant; try again on the next tick
                    Ok(None) => {}
                    Err(e) => {
                        self.status = format!("⚠️ Camera error: {}", e);
                    }
                }

                Task::none()
            }
            Message::PrefixChanged(prefix) => {
                self.prefix = prefix;
                Task::none()
            }
            Message::Snapshot => {
                let frame = match self.source.read_frame() {
                    Ok(Some(frame)) => frame,
                    _ => {
                        self.status = "⚠️ No frame available, snapshot skipped.".to_string();
                        return Task::none();
                    }
                };

                let filename = snapshot_filename(&self.prefix, self.angle.current());
                self.angle.advance();

                // Remember the prefix the user is actually capturing with
                if self.settings.prefix != self.prefix {
                    self.settings.prefix = self.prefix.clone();
                    if let Err(e) = self.settings.save() {
                        eprintln!("⚠️  Failed to save settings: {}", e);
                    }
                }

                self.status = format!("📸 Capturing {}...", filename);

                // Encode and write in the background to keep the preview live
                Task::perform(
                    save_snapshot(self.store.clone(), frame, filename),
                    Message::SnapshotSaved,
                )
            }
            Message::SnapshotSaved(Ok(image)) => {
                println!("📸 Saved {}", image.path.display());
                self.status = format!("✅ Saved {}", image.filename);

                // New snapshots append in capture order
                self.captured.push(image);

                scrollable::snap_to(scrollable::Id::new(ui::browser::LIST_ID), RelativeOffset::END)
            }
            Message::SnapshotSaved(Err(e)) => {
                eprintln!("❌ Snapshot failed: {}", e);
                self.status = format!("❌ Snapshot failed: {}", e);
                Task::none()
            }
            Message::Select(index) => {
                if index < self.captured.len() {
                    self.selected = Some(index);
                }
                Task::none()
            }
            Message::OpenImage(index) => {
                if let Some(image) = self.captured.get(index) {
                    if let Err(e) = open::that(&image.path) {
                        self.status = format!("⚠️ Could not open {}: {}", image.filename, e);
                    }
                }
                Task::none()
            }
            Message::DeleteImage(index) => {
                if index < self.captured.len() {
                    let image = self.captured.remove(index);
                    self.selected = None;

                    match self.store.delete(&image.filename) {
                        Ok(true) => {
                            self.status = format!("✅ Deleted {}", image.filename);
                        }
                        // Already gone; dropping the list entry is enough
                        Ok(false) => {
                            self.status = format!("✅ Removed {} (file was already gone)", image.filename);
                        }
                        Err(e) => {
                            eprintln!("❌ Failed to delete {}: {}", image.filename, e);
                            self.status = format!("❌ Failed to delete {}: {}", image.filename, e);
                        }
                    }
                }
                Task::none()
            }
            Message::Refresh => {
                self.reload();
                Task::none()
            }
            Message::ChangeFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Save Folder")
                    .pick_folder();

                if let Some(folder) = folder {
                    match CaptureStore::new(folder.clone()) {
                        Ok(store) => {
                            self.store = store;
                            self.settings.save_directory = Some(folder);
                            if let Err(e) = self.settings.save() {
                                eprintln!("⚠️  Failed to save settings: {}", e);
                            }
                            self.reload();
                        }
                        Err(e) => {
                            self.status = format!("❌ Cannot use that folder: {}", e);
                        }
                    }
                }

                Task::none()
            }
        }
    }

    /// Rebuild the captured list from the save directory, newest first
    fn reload(&mut self) {
        match self.store.enumerate() {
            Ok(images) => {
                self.captured = images;
                self.selected = None;
                self.status = format!(
                    "Ready. {} images in {}.",
                    self.captured.len(),
                    self.store.directory().display()
                );
            }
            Err(e) => {
                eprintln!("❌ Failed to scan save directory: {}", e);
                self.status = format!("❌ Failed to scan save directory: {}", e);
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let panes = row![
            ui::preview::preview_pane(self.preview.as_ref()),
            ui::browser::browser_pane(&self.captured, self.selected),
        ]
        .spacing(16)
        .height(Length::Fill);

        let controls = row![
            text_input("File name prefix", &self.prefix)
                .on_input(Message::PrefixChanged)
                .padding(10)
                .width(Length::Fixed(260.0)),
            button("Capture Image")
                .on_press(Message::Snapshot)
                .padding(10),
            button("Refresh").on_press(Message::Refresh).padding(10),
            button("Change Folder...")
                .on_press(Message::ChangeFolder)
                .padding(10),
        ]
        .spacing(10);

        let content = column![panes, controls, text(&self.status).size(14)]
            .spacing(12)
            .padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Drive the preview loop for the lifetime of the window
    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(PREVIEW_DELAY).map(Message::Tick)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Webcam Capture", CamCapture::update, CamCapture::view)
        .subscription(CamCapture::subscription)
        .theme(CamCapture::theme)
        .centered()
        .run_with(CamCapture::new)
}

/// Encode one captured frame to PNG and write it into the store.
/// Runs on a background thread to avoid blocking the UI.
async fn save_snapshot(
    store: CaptureStore,
    frame: Frame,
    filename: String,
) -> Result<CapturedImage, String> {
    tokio::task::spawn_blocking(move || {
        store
            .write_frame(&filename, &frame)
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}
