//! Conversations: the list of chats and an open conversation with a draft
//! box.

use crate::chat::{format_chat_date, format_time, ChatLog};
use crate::components::member_detail::initials;
use crate::components::{Footer, Header, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::data::{Chat, DataProvider, Message, Sender};
use crate::keymap::Action;
use crate::navigation::NavEvent;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{create_standard_layout, ListStateExt, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap};
use tracing::debug;

struct Conversation {
    chat: Chat,
    messages: Vec<Message>,
}

struct OpenChat {
    index: usize,
    log: ChatLog,
    input: TextInput,
    /// Lines scrolled up from the bottom
    scroll: u16,
}

pub struct ChatScreen {
    conversations: Vec<Conversation>,
    list_state: ListState,
    open: Option<OpenChat>,
}

impl ChatScreen {
    pub fn new(provider: &dyn DataProvider) -> Self {
        let conversations: Vec<Conversation> = provider
            .list_chats()
            .into_iter()
            .map(|chat| {
                let messages = provider.list_messages(&chat.id);
                Conversation { chat, messages }
            })
            .collect();
        let mut list_state = ListState::default();
        list_state.clamp_to(conversations.len());
        Self {
            conversations,
            list_state,
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Messages of the open conversation
    pub fn messages(&self) -> Option<&[Message]> {
        self.open.as_ref().map(|open| open.log.messages.as_slice())
    }

    fn open_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let Some(conversation) = self.conversations.get_mut(index) else {
            return;
        };
        conversation.chat.unread = 0;
        debug!("Opened conversation with {}", conversation.chat.member_name);
        self.open = Some(OpenChat {
            index,
            log: ChatLog::new(conversation.messages.clone()),
            input: TextInput::new(),
            scroll: 0,
        });
    }

    /// Leave the open conversation, keeping what was sent in it.
    fn close(&mut self) {
        if let Some(open) = self.open.take() {
            if let Some(conversation) = self.conversations.get_mut(open.index) {
                if let Some(last) = open.log.messages.last() {
                    conversation.chat.last_message = last.text.clone();
                    conversation.chat.timestamp = last.timestamp;
                }
                conversation.messages = open.log.messages;
            }
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, now: &DateTime<Local>) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());

        if self.conversations.is_empty() {
            frame.render_widget(
                Paragraph::new("No conversations yet")
                    .style(t.muted_style())
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
            return;
        }

        let width = block.inner(area).width as usize;
        let items: Vec<ListItem> = self
            .conversations
            .iter()
            .map(|c| {
                let chat = &c.chat;
                let date = format_chat_date(&chat.timestamp, now);
                let name = format!(" {}  {}", initials(&chat.member_name), chat.member_name);
                let gap = width
                    .saturating_sub(name.chars().count() + date.chars().count() + 3)
                    .max(1);
                let mut second = vec![Span::styled(
                    format!("     {}", chat.last_message),
                    t.muted_style(),
                )];
                if chat.unread > 0 {
                    second.push(Span::raw("  "));
                    second.push(Span::styled(
                        format!(" {} ", chat.unread),
                        t.button_style(true),
                    ));
                }
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(name, t.emphasis_style()),
                        Span::raw(" ".repeat(gap)),
                        Span::styled(date, t.muted_style()),
                    ]),
                    Line::from(second),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_conversation(frame: &mut Frame, area: Rect, open: &OpenChat, name: &str) {
        let t = theme();
        let [log_area, input_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(Span::styled(format!(" {} ", name), t.title_style()));
        let inner_height = block.inner(log_area).height;

        let mut lines = Vec::new();
        for message in &open.log.messages {
            let mine = message.sender == Sender::Me;
            let alignment = if mine { Alignment::Right } else { Alignment::Left };
            lines.push(
                Line::from(Span::styled(
                    format!(" {} ", message.text),
                    t.bubble_style(mine),
                ))
                .alignment(alignment),
            );
            lines.push(
                Line::styled(format_time(&message.timestamp), t.muted_style())
                    .alignment(alignment),
            );
            lines.push(Line::default());
        }

        let total = lines.len() as u16;
        let bottom = total.saturating_sub(inner_height);
        let offset = bottom.saturating_sub(open.scroll);
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((offset, 0)),
            log_area,
        );

        frame.render_text_input_widget(
            TextInputWidget::new(&open.input)
                .title("Message")
                .placeholder("Type a message...")
                .focused(true),
            input_area,
        );
    }

    fn handle_open_key(
        open: &mut OpenChat,
        key: &KeyEvent,
        action: Option<Action>,
    ) -> bool {
        match action {
            Some(Action::Cancel) => return true,
            Some(Action::Confirm) => {
                open.log.draft = open.input.take();
                if open.log.submit() {
                    open.scroll = 0;
                } else {
                    // Nothing sent: keep what was typed
                    open.input.set_text(std::mem::take(&mut open.log.draft));
                    open.input.move_end();
                }
            }
            Some(Action::ScrollUp | Action::PageUp) => open.scroll = open.scroll.saturating_add(3),
            Some(Action::ScrollDown | Action::PageDown) => {
                open.scroll = open.scroll.saturating_sub(3)
            }
            _ => {
                open.input.handle_key(key.code, key.modifiers, action);
            }
        }
        false
    }
}

impl Screen for ChatScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let [header, content, footer] = create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);
        let keymap = &ctx.config.keymap;

        match &self.open {
            Some(open) => {
                let name = self
                    .conversations
                    .get(open.index)
                    .map(|c| c.chat.member_name.clone())
                    .unwrap_or_default();
                Header::render(frame, header, ScreenId::Chat.title(), &name);
                Self::render_conversation(frame, content, open, &name);
                Footer::render(
                    frame,
                    footer,
                    &format!(
                        "{}: Send | {}: Scroll | {}: Conversations",
                        keymap.get_key_display_for_action(Action::Confirm),
                        keymap.get_key_display_for_action(Action::ScrollUp),
                        keymap.get_key_display_for_action(Action::Cancel),
                    ),
                );
            }
            None => {
                let unread: u32 = self.conversations.iter().map(|c| c.chat.unread).sum();
                let subtitle = if unread > 0 {
                    format!("{} unread", unread)
                } else {
                    String::new()
                };
                Header::render(frame, header, ScreenId::Chat.title(), &subtitle);
                self.render_list(frame, content, &ctx.now);
                Footer::render(frame, footer, &keymap.footer_navigation());
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action(key);

        if let Some(open) = self.open.as_mut() {
            if Self::handle_open_key(open, key, action) {
                self.close();
            }
            return Ok(ScreenAction::None);
        }

        Ok(match action {
            Some(Action::Confirm) => {
                self.open_selected();
                ScreenAction::None
            }
            Some(Action::Cancel) => ScreenAction::Navigate(NavEvent::Back),
            Some(action) => {
                self.list_state.apply_action(action, self.conversations.len());
                ScreenAction::None
            }
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        self.open.is_some()
    }
}
