//! Interactive session: reads shell commands and drives the view-models.
//!
//! Every command goes through the same components a graphical front end
//! would use. `nueva` and `editar` open the task editor, fill it from the
//! arguments (each `--persona` through its own person editor) and submit it;
//! a form that fails validation prints its warnings and is cancelled, which
//! leaves the task list untouched.

use std::{fmt::Display, io::Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, warn};
use tareas_core::{
    dialog::OnClose, CloseOutcome, CreateResult, DeleteResult, Home, MessageService,
    Notification, OperationStatus, SearchBar, TareaError, TaskDraft, TaskEditor, TaskSaved,
    Tasks, UpdateResult,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    cli::{split_line, Command, EditArgs, IdArgs, PersonSpec, ShellCommand, TaskArgs},
    renderer::TerminalRenderer,
};

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    home: Home,
    search_bar: SearchBar,
    messages: MessageService,
    renderer: TerminalRenderer,
}

impl Session {
    /// Create a session over `home`, printing through `renderer`.
    pub fn new(home: Home, renderer: TerminalRenderer) -> Self {
        Self {
            home,
            search_bar: SearchBar::new(),
            messages: MessageService::new(),
            renderer,
        }
    }

    /// Execute lines from `reader` until end of input or `salir`.
    pub async fn run<R>(&mut self, reader: R, prompt: bool) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        loop {
            if prompt {
                print!("tareas> ");
                std::io::stdout().flush().context("Failed to flush stdout")?;
            }
            let Some(line) = lines.next_line().await.context("Failed to read command")? else {
                break;
            };
            if self.execute(&line).await == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one line. Parse and command errors are printed; the session
    /// always survives them.
    pub async fn execute(&mut self, line: &str) -> Flow {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Flow::Continue;
        }

        let words = match split_line(line) {
            Ok(words) => words,
            Err(err) => {
                self.render(OperationStatus::failure(err.to_string()));
                return Flow::Continue;
            }
        };
        let command = match ShellCommand::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                if let Err(io_err) = err.print() {
                    warn!("failed to print usage: {io_err}");
                }
                return Flow::Continue;
            }
        };
        debug!("executing {command:?}");

        let flow = match self.dispatch(command).await {
            Ok(flow) => flow,
            Err(err) => {
                self.flush_messages();
                self.render(OperationStatus::failure(format!("{err:#}")));
                Flow::Continue
            }
        };
        self.flush_messages();
        flow
    }

    async fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Create(args) => self.create(args).await?,
            Command::Edit(args) => self.edit(args).await?,
            Command::Toggle(IdArgs { id }) => self.toggle(id)?,
            Command::Search(args) => self.search(args.estado.as_deref())?,
            Command::List => self.search(None)?,
            Command::Show(IdArgs { id }) => self.show(id)?,
            Command::Delete(IdArgs { id }) => self.delete(id)?,
            Command::Help => self.help(),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn create(&mut self, args: TaskArgs) -> Result<()> {
        let (mut editor, on_close) = self.home.open_task_dialog(None)?;
        self.fill(&mut editor, args).await?;
        self.submit(editor, on_close).await
    }

    async fn edit(&mut self, args: EditArgs) -> Result<()> {
        let task = self.home.task(args.id)?;
        let (mut editor, on_close) = self.home.open_task_dialog(Some(&task))?;

        // Highest index first so the remaining indices stay valid
        let mut removals = args.quitar_persona;
        removals.sort_unstable();
        removals.dedup();
        for index in removals.into_iter().rev() {
            if editor.remove_person(index)?.is_none() {
                self.messages.add(Notification::warn(
                    "Persona no encontrada",
                    format!("No hay ninguna persona en la posición {index}"),
                ));
            }
        }

        self.fill(&mut editor, args.task).await?;
        self.submit(editor, on_close).await
    }

    async fn fill(&mut self, editor: &mut TaskEditor, args: TaskArgs) -> Result<()> {
        if let Some(name) = args.nombre {
            editor.set_name(&name);
        }
        if let Some(due_date) = args.fecha {
            editor.set_due_date(due_date);
        }
        for spec in args.persona {
            self.add_person(editor, spec).await?;
        }
        Ok(())
    }

    async fn add_person(&mut self, editor: &mut TaskEditor, spec: PersonSpec) -> Result<()> {
        let (mut person_editor, on_close) = editor.open_person_dialog()?;
        person_editor.set_full_name(&spec.full_name);
        person_editor.set_age(spec.age);
        person_editor.set_skills(&spec.skills);

        if person_editor.close(true, &mut self.messages)? == CloseOutcome::KeptOpen {
            person_editor.close(false, &mut self.messages)?;
        }
        editor
            .on_person_dialog_closed(on_close, &mut self.messages)
            .await?;
        Ok(())
    }

    async fn submit(&mut self, mut editor: TaskEditor, on_close: OnClose<TaskDraft>) -> Result<()> {
        if editor.close(true, &mut self.messages)? == CloseOutcome::KeptOpen {
            editor.close(false, &mut self.messages)?;
        }
        self.flush_messages();

        match self.home.on_task_dialog_closed(on_close).await {
            Some(TaskSaved::Created(task)) => self.render(CreateResult::new(task)),
            Some(TaskSaved::Updated { task, changes }) => {
                self.render(UpdateResult::with_changes(task, changes));
            }
            None => self.render(OperationStatus::failure("La tarea no se guardó")),
        }
        Ok(())
    }

    fn toggle(&mut self, id: u64) -> Result<()> {
        let task = self
            .home
            .toggle_status(id)
            .ok_or(TareaError::TaskNotFound { id })?;
        let change = format!("Estado: {}", task.status);
        self.render(UpdateResult::with_changes(task, vec![change]));
        Ok(())
    }

    fn search(&mut self, query: Option<&str>) -> Result<()> {
        self.search_bar.set_query(query.unwrap_or_default())?;
        let status = self.search_bar.emit();
        let tasks = Tasks(self.home.search(status));

        let title = match status {
            Some(status) => format!("# Tareas: {status}"),
            None => "# Tareas".to_string(),
        };
        self.renderer.render(&format!("{title}\n\n{tasks}"));
        Ok(())
    }

    fn show(&mut self, id: u64) -> Result<()> {
        let task = self.home.task(id)?;
        let hint = format!("{}: `estado {}`\n", Home::toggle_label(&task), task.id);
        self.renderer.render(&format!("{task}{hint}"));
        Ok(())
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        let task = self
            .home
            .delete(id)
            .ok_or(TareaError::TaskNotFound { id })?;
        self.render(DeleteResult::new(task));
        Ok(())
    }

    fn help(&self) {
        println!("{}", ShellCommand::command().render_help());
    }

    fn render(&self, value: impl Display) {
        self.renderer.render(&value.to_string());
    }

    fn flush_messages(&mut self) {
        for notification in self.messages.drain() {
            self.renderer.notify(&notification);
        }
    }
}
