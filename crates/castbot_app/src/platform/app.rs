use std::sync::{Arc, Mutex, PoisonError};

use castbot_core::{update, Action, Effect, Keyboard, Msg, Session, UserId};
use castbot_engine::{EngineEvent, EngineHandle, HttpProfileSource, ReqwestFetcher, TokioPacer};
use castbot_logging::{castbot_debug, castbot_error, castbot_info, castbot_warn};
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardMarkup};
use tokio::sync::mpsc;

use super::config::BotConfig;
use super::effects::{map_summary, EffectRunner};
use super::logging;
use super::ui::render::{keyboard_markup, profile_text};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub async fn run_app() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let (config, config_file) = BotConfig::load()?;
    logging::initialize(config.log_destination, config.log_level);
    match config_file {
        Some(path) => castbot_info!("Loaded config file {:?}", path),
        None => castbot_debug!("No config file found; using environment only"),
    }
    castbot_info!("Starting castbot with {:?}", config);

    let fetcher = ReqwestFetcher::new(config.fetch_settings())?;
    let (engine, events) = EngineHandle::new(
        Arc::new(HttpProfileSource::new(fetcher)),
        Arc::new(TokioPacer::new(config.pause)),
    );

    let bot = Bot::new(config.token.clone());
    let controller = Arc::new(Controller::new(
        bot.clone(),
        Session::new(UserId(config.authorized_user_id)),
        engine,
    ));
    controller.clone().spawn_event_loop(events);

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    castbot_info!("Bot successfully launched");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![controller])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_message(msg: Message, controller: Arc<Controller>) -> HandlerResult {
    let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
        return Ok(());
    };
    let action = Action::from_message_text(text);
    controller
        .handle(Surface::Chat, msg.chat.id, UserId(user.id.0), action)
        .await;
    Ok(())
}

async fn on_callback(bot: Bot, query: CallbackQuery, controller: Arc<Controller>) -> HandlerResult {
    let chat = query.message.as_ref().map(|message| message.chat().id);
    let action = query.data.as_deref().and_then(Action::from_callback_data);

    let toast = match (chat, action) {
        (Some(chat), Some(action)) => {
            controller
                .handle(Surface::Callback, chat, UserId(query.from.id.0), action)
                .await
        }
        _ => {
            castbot_debug!("Ignoring callback data {:?}", query.data);
            None
        }
    };

    // Unanswered callbacks keep the button spinning on the client.
    let mut answer = bot.answer_callback_query(query.id.clone());
    if let Some(text) = toast {
        answer = answer.text(text);
    }
    answer.await?;
    Ok(())
}

/// Where a notice can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Chat,
    Callback,
}

/// Owns the session and serializes every update through the core state machine.
struct Controller {
    bot: Bot,
    session: Mutex<Session>,
    runner: EffectRunner,
}

impl Controller {
    fn new(bot: Bot, session: Session, engine: EngineHandle) -> Self {
        Self {
            bot,
            session: Mutex::new(session),
            runner: EffectRunner::new(engine),
        }
    }

    fn dispatch_msg(&self, msg: Msg) -> Vec<Effect> {
        let mut guard = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        let (next, effects) = update(guard.clone(), msg);
        *guard = next;
        effects
    }

    /// Applies a user action and delivers the resulting messages. On the
    /// callback surface the first notice is returned for the toast instead.
    async fn handle(
        &self,
        surface: Surface,
        chat: ChatId,
        from: UserId,
        action: Action,
    ) -> Option<String> {
        castbot_debug!("Action {:?} from {:?}", action, from);
        let effects = self.dispatch_msg(Msg::User {
            from,
            action: action.clone(),
        });
        for reason in effects.iter().filter_map(Effect::rejection) {
            castbot_debug!("Rejected {:?} from {:?}: {}", action, from, reason);
        }
        let outgoing = self.runner.apply(chat, effects);
        self.deliver(surface, chat, outgoing).await
    }

    async fn deliver(
        &self,
        surface: Surface,
        chat: ChatId,
        effects: Vec<Effect>,
    ) -> Option<String> {
        let mut toast = None;
        for effect in effects {
            match effect {
                Effect::Send { text, keyboard } => {
                    self.send(chat, text, keyboard.map(keyboard_markup)).await;
                }
                Effect::Notice(text) if surface == Surface::Callback && toast.is_none() => {
                    toast = Some(text);
                }
                Effect::Notice(text) => self.send(chat, text, None).await,
                Effect::StartScrape(_) | Effect::StopScrape => {
                    castbot_warn!("Engine effect reached delivery: {:?}", effect);
                }
            }
        }
        toast
    }

    async fn send(&self, chat: ChatId, text: String, markup: Option<InlineKeyboardMarkup>) {
        let mut request = self.bot.send_message(chat, text);
        if let Some(markup) = markup {
            request = request.reply_markup(markup);
        }
        if let Err(err) = request.await {
            castbot_error!("Telegram send to chat {} failed: {}", chat.0, err);
        }
    }

    fn spawn_event_loop(self: Arc<Self>, mut events: mpsc::UnboundedReceiver<EngineEvent>) {
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                self.on_engine_event(event).await;
            }
        });
    }

    async fn on_engine_event(&self, event: EngineEvent) {
        match event {
            EngineEvent::ProfileFound {
                run_id,
                id,
                profile,
            } => {
                let Some(chat) = self.runner.chat_for(run_id) else {
                    castbot_warn!("Profile {} from unknown run {}", id, run_id);
                    return;
                };
                let markup = keyboard_markup(Keyboard::Stop);
                self.send(chat, profile_text(&profile), Some(markup)).await;
            }
            EngineEvent::ScrapeFinished { run_id, summary } => {
                let Some(chat) = self.runner.finish(run_id) else {
                    castbot_warn!("Completion from unknown run {}", run_id);
                    return;
                };
                let effects = self.dispatch_msg(Msg::ScrapeFinished {
                    run_id,
                    outcome: map_summary(summary),
                });
                let outgoing = self.runner.apply(chat, effects);
                self.deliver(Surface::Chat, chat, outgoing).await;
            }
        }
    }
}
