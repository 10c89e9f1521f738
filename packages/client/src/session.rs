//! Interactive chat session.

use std::path::PathBuf;

use roomchat_server::domain::SenderName;
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    api::ApiClient,
    args::ClientArgs,
    command::{self, Command, HELP_TEXT},
    error::ClientError,
    watcher::{format_message, spawn_watcher},
};

/// Room the server always keeps
const DEFAULT_ROOM: &str = "General";

/// What the input thread hands to the session
enum Input {
    Line(String),
    Failed(ClientError),
}

/// State of a running session
struct Session {
    api: ApiClient,
    name: String,
    room: String,
    watcher: Option<JoinHandle<()>>,
}

impl Session {
    /// Join `room`, print its history and start watching it
    async fn enter_room(&mut self, room: &str) -> Result<(), ClientError> {
        let Some(joined) = self.api.join_room(room).await? else {
            println!("Room name cannot be blank.");
            return Ok(());
        };

        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
        self.room = joined.name;
        println!("== {} ==", self.room);
        for message in self.api.fetch_messages(&self.room).await? {
            println!("{}", format_message(&message));
        }
        self.watcher = Some(spawn_watcher(self.api.ws_url(&self.room)?).await?);
        tracing::info!("Joined room '{}'", self.room);
        Ok(())
    }

    /// Run one command; `false` ends the session
    async fn handle(&mut self, command: Command) -> Result<bool, ClientError> {
        match command {
            Command::Send(text) => {
                // Events come back through the watcher
                self.api.post_message(&self.room, &self.name, &text).await?;
            }
            Command::Join(room) => self.enter_room(&room).await?,
            Command::Rooms => {
                for room in self.api.list_rooms().await? {
                    let marker = if room.name == self.room { "*" } else { " " };
                    println!("{} {} (created {})", marker, room.name, room.created_at);
                }
            }
            Command::Name(name) => match SenderName::new(name) {
                Ok(name) => {
                    self.name = name.into_string();
                    println!("You are now {}.", self.name);
                }
                Err(e) => println!("{e}"),
            },
            Command::Clear => self.api.clear_room(&self.room).await?,
            Command::Reset => {
                self.api.reset().await?;
                if self.room != DEFAULT_ROOM {
                    self.enter_room(DEFAULT_ROOM).await?;
                }
            }
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(format!("{}_messages.txt", self.room)));
                let body = self.api.export(&self.room).await?;
                tokio::fs::write(&path, &body).await?;
                println!(
                    "Exported {} messages to {}",
                    body.lines().count(),
                    path.display()
                );
            }
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => return Ok(false),
            Command::Usage(usage) => println!("Usage: {usage}"),
            Command::Unknown(name) => println!("Unknown command: /{name} (type /help)"),
        }
        Ok(true)
    }
}

/// Read lines on a plain thread; rustyline blocks
fn spawn_input_thread(prompt: String) -> mpsc::Receiver<Input> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                let _ = tx.blocking_send(Input::Failed(e.into()));
                return;
            }
        };
        loop {
            match editor.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if tx.blocking_send(Input::Line(line)).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    let _ = tx.blocking_send(Input::Failed(e.into()));
                    break;
                }
            }
        }
    });
    rx
}

/// Run the interactive client until `/quit`, Ctrl-C or Ctrl-D
pub async fn run_client(args: ClientArgs) -> Result<(), ClientError> {
    let api = ApiClient::new(&args.url)?;
    api.health().await?;

    let name = SenderName::new(args.name)
        .map_err(|e| ClientError::InvalidName(e.to_string()))?
        .into_string();
    let mut session = Session {
        api,
        name,
        room: DEFAULT_ROOM.to_string(),
        watcher: None,
    };
    session.enter_room(&args.room).await?;
    println!("Type /help for commands.");

    let mut lines = spawn_input_thread("> ".to_string());
    while let Some(input) = lines.recv().await {
        let line = match input {
            Input::Line(line) => line,
            Input::Failed(e) => return Err(e),
        };
        let Some(command) = command::parse(&line) else {
            continue;
        };
        match session.handle(command).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::warn!("Command failed: {}", e);
                println!("Error: {e}");
            }
        }
    }

    if let Some(watcher) = session.watcher.take() {
        watcher.abort();
    }
    println!("Bye!");
    Ok(())
}
