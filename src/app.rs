//! Demo application state and event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use items_tui::config::TuiConfig;
use items_tui::error::{GuiError, GuiResult};
use items_tui::state::{LabelSource, ListItem, SelectionChange};
use items_tui::ui::components::{ComboBox, ItemsControl, ListBox};
use items_tui::ui::{CellContext, Font, InputEvent, Skin};
use ratatui::style::Modifier;
use std::cell::RefCell;
use std::rc::Rc;

/// Item shown in the demo list box
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: &'static str,
    pub kind: &'static str,
    pub moons: Option<u32>,
}

impl ListItem for Planet {
    fn label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }

    fn field(&self, name: &str) -> GuiResult<Option<String>> {
        match name {
            "name" => Ok(Some(self.name.to_string())),
            "kind" => Ok(Some(self.kind.to_string())),
            "moons" => Ok(self.moons.map(|m| m.to_string())),
            _ => Err(GuiError::UnknownField {
                field: name.to_string(),
                item: "Planet",
            }),
        }
    }
}

const PLANETS: &[Planet] = &[
    Planet { name: "Mercury", kind: "terrestrial", moons: None },
    Planet { name: "Venus", kind: "terrestrial", moons: None },
    Planet { name: "Earth", kind: "terrestrial", moons: Some(1) },
    Planet { name: "Mars", kind: "terrestrial", moons: Some(2) },
    Planet { name: "Jupiter", kind: "gas giant", moons: Some(95) },
    Planet { name: "Saturn", kind: "gas giant", moons: Some(146) },
    Planet { name: "Uranus", kind: "ice giant", moons: Some(28) },
    Planet { name: "Neptune", kind: "ice giant", moons: Some(16) },
];

const ACCENTS: &[&str] = &["Cornflower", "Crimson", "Emerald", "Amber", "Slate"];

/// Which widget receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Combo,
}

/// Main application struct
pub struct App {
    pub context: CellContext,
    pub planets: ListBox<Planet>,
    pub accents: ComboBox<&'static str>,
    pub focus: Focus,
    /// Latest selection or click message, shared with widget callbacks
    pub status_message: Rc<RefCell<Option<String>>>,
    quit: bool,
}

impl App {
    /// Create the demo widgets styled from `config`
    pub fn new(config: &TuiConfig) -> Self {
        let skin = Skin::default().with_config(config);
        let status_message = Rc::new(RefCell::new(None));

        let label_source = match &config.name_field {
            Some(field) => LabelSource::field(field.as_str()),
            None => LabelSource::field("name"),
        };
        let mut planets = ListBox::new(&skin)
            .with_items(PLANETS.iter().cloned())
            .with_label_source(label_source);
        planets
            .items_list_mut()
            .on_selection_changed(status_writer(&status_message, "planet"));
        let sink = Rc::clone(&status_message);
        planets.on_item_clicked(move |index| {
            *sink.borrow_mut() = Some(format!("clicked planet #{index}"));
        });

        let mut accents = ComboBox::new(&Skin {
            font: Some(Font::cell().with_modifier(Modifier::BOLD)),
            ..skin
        })
        .with_items(ACCENTS.iter().copied());
        accents.items_list_mut().set_selected_index(Some(0));
        accents
            .items_list_mut()
            .on_selection_changed(status_writer(&status_message, "accent"));

        Self {
            context: CellContext::default(),
            planets,
            accents,
            focus: Focus::default(),
            status_message,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn status(&self) -> Option<String> {
        self.status_message.borrow().clone()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if key.code == KeyCode::Tab {
            self.accents.set_open(false);
            self.focus = match self.focus {
                Focus::List => Focus::Combo,
                Focus::Combo => Focus::List,
            };
            return;
        }

        let event = InputEvent::from(key);
        let handled = match self.focus {
            Focus::List => self.planets.handle_input(&self.context, &event),
            Focus::Combo => self.accents.handle_input(&self.context, &event),
        };

        if !handled && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.quit = true;
        }
    }

    /// Handle a mouse event, routing it to the widget under the pointer
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(event) = InputEvent::from_mouse(mouse) else {
            return;
        };
        let Some(position) = event.position() else {
            return;
        };

        // The open dropdown overlaps the list box, so it sees events first
        let over_combo = self.accents.bounds().contains(position)
            || (self.accents.is_open()
                && self
                    .accents
                    .dropdown_rectangle(&self.context)
                    .contains(position));

        if over_combo || (self.accents.is_open() && matches!(event, InputEvent::PointerDown(_))) {
            self.focus = Focus::Combo;
            self.accents.handle_input(&self.context, &event);
        } else if self.planets.bounds().contains(position) {
            self.focus = Focus::List;
            self.planets.handle_input(&self.context, &event);
        }
    }
}

fn status_writer(
    status: &Rc<RefCell<Option<String>>>,
    what: &'static str,
) -> impl FnMut(SelectionChange) + 'static {
    let sink = Rc::clone(status);
    move |change| {
        let message = match change.new {
            Some(index) => format!("{what} #{index} selected"),
            None => format!("{what} selection cleared"),
        };
        *sink.borrow_mut() = Some(message);
    }
}
