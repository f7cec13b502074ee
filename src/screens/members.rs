//! Member directory: search box, segment chips and the filtered list.

use crate::components::{Footer, Header, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::data::Member;
use crate::directory::{filter_members, SegmentFilter};
use crate::keymap::Action;
use crate::navigation::NavEvent;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{create_standard_layout, typed_char, ListStateExt, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};
use tracing::debug;

pub struct MembersScreen {
    members: Vec<Member>,
    search: TextInput,
    segment: SegmentFilter,
    search_focused: bool,
    list_state: ListState,
}

impl MembersScreen {
    pub fn new(members: Vec<Member>) -> Self {
        let mut list_state = ListState::default();
        list_state.clamp_to(members.len());
        Self {
            members,
            search: TextInput::new(),
            segment: SegmentFilter::All,
            search_focused: false,
            list_state,
        }
    }

    pub fn segment(&self) -> &SegmentFilter {
        &self.segment
    }

    /// Members passing the current search and segment
    pub fn visible(&self) -> Vec<&Member> {
        filter_members(&self.members, self.search.text(), &self.segment)
    }

    fn refilter(&mut self) {
        let count = self.visible().len();
        debug!(
            "Directory filter: search={:?} segment={} ({} results)",
            self.search.text(),
            self.segment,
            count
        );
        self.list_state.clamp_to(count);
    }

    fn selected_id(&self) -> Option<String> {
        let index = self.list_state.selected()?;
        self.visible().get(index).map(|m| m.id.clone())
    }

    fn set_segment(&mut self, segment: SegmentFilter) {
        self.segment = segment;
        self.refilter();
    }

    fn chips_line(&self) -> Line<'static> {
        let t = theme();
        let mut spans = vec![Span::styled("Segment  ", t.muted_style())];
        for chip in SegmentFilter::chips() {
            let style = t.button_style(chip == self.segment);
            spans.push(Span::styled(format!(" {} ", chip.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn list_item(member: &Member) -> ListItem<'static> {
        let t = theme();
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(member.name.clone(), t.emphasis_style()),
                Span::raw("  "),
                Span::styled(format!("[{}]", member.level.label()), t.level_style(member.level)),
            ]),
            Line::from(vec![
                Span::styled(member.company.clone(), t.text_style()),
                Span::styled(format!("  ·  {}", member.segment), t.muted_style()),
            ]),
        ])
    }

    fn handle_search_key(&mut self, key: &KeyEvent, action: Option<Action>) {
        let leaves_search = matches!(
            action,
            Some(Action::Cancel | Action::Confirm | Action::MoveDown | Action::NextField)
        );
        if leaves_search && typed_char(key.code, key.modifiers).is_none() {
            self.search_focused = false;
            return;
        }

        let before = self.search.text().to_string();
        self.search.handle_key(key.code, key.modifiers, action);
        if self.search.text() != before {
            self.refilter();
        }
    }
}

impl Screen for MembersScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [header, content, footer] = create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);
        let visible = self.visible();
        Header::render(
            frame,
            header,
            ScreenId::Members.title(),
            &format!("{} of {}", visible.len(), self.members.len()),
        );

        let [search_area, chips_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(content);

        frame.render_text_input_widget(
            TextInputWidget::new(&self.search)
                .title("Search")
                .placeholder("Name or company")
                .focused(self.search_focused),
            search_area,
        );
        frame.render_widget(Paragraph::new(self.chips_line()), chips_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.search_focused {
                t.border_style()
            } else {
                t.border_focused_style()
            });

        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new("No members found")
                    .style(t.muted_style())
                    .alignment(Alignment::Center)
                    .block(block),
                list_area,
            );
        } else {
            let items: Vec<ListItem> = visible.iter().map(|m| Self::list_item(m)).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
            frame.render_stateful_widget(list, list_area, &mut self.list_state);
        }

        let keymap = &ctx.config.keymap;
        let hint = if self.search_focused {
            format!(
                "Type to filter | {}: Done",
                keymap.get_key_display_for_action(Action::Cancel)
            )
        } else {
            format!(
                "{}: Search | {}/{}: Segment | {}: Open | {}: Back",
                keymap.get_key_display_for_action(Action::Search),
                keymap.get_key_display_for_action(Action::MoveLeft),
                keymap.get_key_display_for_action(Action::MoveRight),
                keymap.get_key_display_for_action(Action::Confirm),
                keymap.get_key_display_for_action(Action::Cancel),
            )
        };
        Footer::render(frame, footer, &hint);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action(key);

        if self.search_focused {
            self.handle_search_key(key, action);
            return Ok(ScreenAction::None);
        }

        let count = self.visible().len();
        Ok(match action {
            Some(Action::Search) => {
                self.search_focused = true;
                ScreenAction::None
            }
            Some(Action::MoveLeft) => {
                self.set_segment(self.segment.previous());
                ScreenAction::None
            }
            Some(Action::MoveRight) => {
                self.set_segment(self.segment.next());
                ScreenAction::None
            }
            Some(Action::Confirm) => match self.selected_id() {
                Some(id) => ScreenAction::Navigate(NavEvent::SelectMember(id)),
                None => ScreenAction::None,
            },
            Some(Action::Cancel) => ScreenAction::Navigate(NavEvent::Back),
            Some(action) => {
                self.list_state.apply_action(action, count);
                ScreenAction::None
            }
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        self.search_focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::{DataProvider, SampleData};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(screen: &mut MembersScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        screen
            .handle_event(
                Event::Key(KeyEvent::new(code, KeyModifiers::NONE)),
                &ScreenContext::new(&config),
            )
            .unwrap()
    }

    fn screen() -> MembersScreen {
        MembersScreen::new(SampleData.list_members())
    }

    #[test]
    fn test_select_member() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Down);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Navigate(NavEvent::SelectMember("2".into()))
        );
    }

    #[test]
    fn test_search_filters_and_unfocuses() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('/'));
        assert!(screen.is_input_focused());
        for c in "roberto".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        assert_eq!(screen.visible().len(), 1);
        press(&mut screen, KeyCode::Esc);
        assert!(!screen.is_input_focused());
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Navigate(NavEvent::SelectMember("3".into()))
        );
    }

    #[test]
    fn test_quit_key_is_typed_in_search() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('/'));
        press(&mut screen, KeyCode::Char('q'));
        assert_eq!(screen.search.text(), "q");
    }

    #[test]
    fn test_segment_chips_and_empty_result() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.segment().label(), "Tecnologia");
        assert_eq!(screen.visible().len(), 1);

        press(&mut screen, KeyCode::Left);
        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.segment().label(), "Educação");
        assert!(screen.visible().is_empty());
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenAction::None);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut screen = screen();
        assert_eq!(
            press(&mut screen, KeyCode::Esc),
            ScreenAction::Navigate(NavEvent::Back)
        );
    }
}
