use crate::storage::BrowserRepository;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use factory_core::{
    Notice, NoticeBoard, NoticeKind, Post, PostDraft, PostId, PostManager, PostStatus,
    SimulatedPublisher, STORAGE_KEY,
};
use gloo_timers::future::TimeoutFuture;

mod format;
mod storage;

const NOTICE_LIFETIME_MS: u32 = 3000;

const MAIN_CSS: Asset = asset!("/assets/main.css");

type Manager = PostManager<BrowserRepository, SimulatedPublisher>;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Content Factory Pro" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        PostManagerView {}
    }
}

/// Shows `next` and clears it after [`NOTICE_LIFETIME_MS`], unless a newer
/// notice has replaced it by then.
fn flash(mut board: Signal<NoticeBoard>, next: Notice) {
    let ticket = board.write().show(next);

    spawn(async move {
        TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
        board.write().expire(ticket);
    });
}

#[component]
fn PostManagerView() -> Element {
    let mut manager =
        use_signal(|| Manager::open(BrowserRepository::new(STORAGE_KEY), SimulatedPublisher));

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut schedule_time = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let notices = use_signal(NoticeBoard::default);

    let on_add = move |_| {
        let draft = PostDraft::new(
            title.read().clone(),
            content.read().clone(),
            schedule_time.read().clone(),
        );

        let outcome = manager.write().create(draft).map(|_| ());
        match outcome {
            Ok(()) => {
                title.set(String::new());
                content.set(String::new());
                schedule_time.set(String::new());
                flash(notices, Notice::Added);
            }
            Err(e) => match Notice::for_error(&e) {
                Some(n) => flash(notices, n),
                None => warn!(error = %e, "post not added"),
            },
        }
    };

    let on_publish = move |id: PostId| {
        loading.set(true);
        let outcome = manager.write().publish(id);
        match outcome {
            Ok(n) => flash(notices, n),
            Err(e) => {
                warn!(post_id = id, error = %e, "publish failed");
                flash(notices, Notice::for_error(&e).unwrap_or(Notice::PublishFailed));
            }
        }
        loading.set(false);
    };

    let on_delete = move |id: PostId| {
        let n = manager.write().delete(id);
        flash(notices, n);
    };

    let posts = manager.read().posts().to_vec();
    let busy = *loading.read();

    rsx! {
        main {
            div { class: "container",
                div { class: "header",
                    h1 { "📱 Content Factory Pro" }
                    p { "Content management and post scheduling for Telegram" }
                }

                if let Some(n) = notices.read().current() {
                    StatusBanner { notice: n }
                }

                div { class: "card",
                    h2 { "✏️ Create a new post" }

                    div { class: "field",
                        label { "Title:" }
                        input {
                            r#type: "text",
                            placeholder: "Enter a title",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }

                    div { class: "field",
                        label { "Content:" }
                        textarea {
                            placeholder: "Write the post content",
                            rows: "6",
                            value: "{content}",
                            oninput: move |evt| content.set(evt.value()),
                        }
                    }

                    div { class: "field",
                        label { "Publish at:" }
                        input {
                            r#type: "datetime-local",
                            value: "{schedule_time}",
                            oninput: move |evt| schedule_time.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn-add",
                        onclick: on_add,
                        disabled: busy,
                        if busy { "⏳ Sending..." } else { "➕ Add post" }
                    }
                }

                h2 { "📋 Posts ({posts.len()})" }

                if posts.is_empty() {
                    div { class: "empty", "No posts yet. Create the first one! 👆" }
                } else {
                    div { class: "post-list",
                        for post in posts {
                            PostCard {
                                key: "{post.id}",
                                post,
                                loading: busy,
                                on_publish,
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusBanner(notice: Notice) -> Element {
    let class = match notice.kind() {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Info => "notice notice-info",
        NoticeKind::Warning => "notice notice-warning",
        NoticeKind::Error => "notice notice-error",
    };

    rsx! {
        div { class, "{notice}" }
    }
}

#[component]
fn PostCard(
    post: Post,
    loading: bool,
    on_publish: EventHandler<PostId>,
    on_delete: EventHandler<PostId>,
) -> Element {
    let id = post.id;
    let published = post.status == PostStatus::Published;
    let badge = if published { "badge badge-published" } else { "badge badge-created" };
    let created = format::local_time(post.created_at);

    rsx! {
        div { class: "post",
            div { class: "post-head",
                div {
                    h3 { "{post.title}" }
                    p { class: "post-meta", "Created: {created}" }
                }
                span { class: badge, "{post.status.label()}" }
            }

            p { class: "post-body", "{post.content}" }

            if !post.schedule_time.is_empty() {
                p { class: "post-schedule",
                    "📅 Scheduled: {format::schedule_time(&post.schedule_time)}"
                }
            }

            div { class: "post-actions",
                button {
                    class: if published { "btn-publish done" } else { "btn-publish" },
                    disabled: loading || published,
                    onclick: move |_| on_publish.call(id),
                    if published { "📤 Published" } else { "📤 Publish" }
                }
                button {
                    class: "btn-delete",
                    onclick: move |_| on_delete.call(id),
                    "🗑️ Delete"
                }
            }
        }
    }
}
