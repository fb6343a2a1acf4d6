//! Server-rendered pages. Markup stays minimal; every visible string comes
//! from the locale's message bundle and the dashboard fills itself from the
//! API client-side.

use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::i18n::message;
use crate::locale::Locale;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{locale}").route(web::get().to(home)))
        .service(web::resource("/{locale}/dashboard").route(web::get().to(dashboard)))
        .service(web::resource("/{locale}/sign-in").route(web::get().to(sign_in)));
}

fn effective_locale(config: &AppConfig, segment: &str) -> Locale {
    Locale::parse(segment).unwrap_or(config.default_locale)
}

fn layout(locale: Locale, title: &str, body: &str) -> String {
    let nav = format!(
        "<nav><a href=\"/{l}\">{home}</a> \
         <a href=\"/{l}/dashboard\">{dash}</a> \
         <a href=\"/{l}/sign-in\">{sign_in}</a> \
         <a href=\"/{other}\">{switch}</a></nav>",
        l = locale.as_str(),
        other = locale.other().as_str(),
        home = message(locale, "nav.home"),
        dash = message(locale, "nav.dashboard"),
        sign_in = message(locale, "nav.signIn"),
        switch = message(locale, "nav.switchLocale"),
    );
    format!(
        "<!DOCTYPE html><html lang=\"{}\"><head><meta charset=\"utf-8\">\
         <title>{}</title></head><body>{}{}<footer>{}</footer></body></html>",
        locale.as_str(),
        title,
        nav,
        body,
        message(locale, "footer.copyright"),
    )
}

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

async fn home(config: web::Data<AppConfig>, path: web::Path<String>) -> HttpResponse {
    let locale = effective_locale(&config, &path.into_inner());
    let m = |key: &str| message(locale, key);

    let booking = if config.booking_url.is_empty() {
        format!("<p>{}</p>", m("booking.title"))
    } else {
        format!(
            "<p><a href=\"{}\">{}</a></p>",
            config.booking_url,
            m("booking.cta")
        )
    };

    let body = format!(
        "<header><h1>{}</h1><p>{}</p><p><a href=\"/{l}/sign-in\">{}</a></p></header>\
         <section id=\"pricing\"><h2>{}</h2><ul><li>{}</li><li>{}</li><li>{}</li></ul></section>\
         <section id=\"testimonials\"><h2>{}</h2><blockquote>{}</blockquote><blockquote>{}</blockquote></section>\
         <section id=\"faq\"><h2>{}</h2><dl><dt>{}</dt><dd>{}</dd><dt>{}</dt><dd>{}</dd></dl></section>\
         <section id=\"booking\"><h2>{}</h2>{}</section>\
         <section id=\"contact\"><h2>{}</h2>\
         <form id=\"contact-form\">\
         <input name=\"name\" placeholder=\"{}\">\
         <input name=\"email\" placeholder=\"{}\">\
         <input name=\"subject\" placeholder=\"{}\">\
         <textarea name=\"message\" placeholder=\"{}\"></textarea>\
         <button type=\"submit\">{}</button></form>\
         <p id=\"contact-status\"></p>\
         <script>\
         document.getElementById('contact-form').addEventListener('submit', async (e) => {{\
           e.preventDefault();\
           const data = Object.fromEntries(new FormData(e.target));\
           const resp = await fetch('/api/contact', {{method: 'POST', headers: {{'Content-Type': 'application/json'}}, body: JSON.stringify(data)}});\
           document.getElementById('contact-status').textContent = resp.ok ? '{}' : '{}';\
         }});\
         </script></section>",
        m("hero.title"),
        m("hero.subtitle"),
        m("hero.cta"),
        m("pricing.title"),
        m("pricing.single"),
        m("pricing.pack"),
        m("pricing.group"),
        m("testimonials.title"),
        m("testimonials.quote1"),
        m("testimonials.quote2"),
        m("faq.title"),
        m("faq.q1"),
        m("faq.a1"),
        m("faq.q2"),
        m("faq.a2"),
        m("booking.title"),
        booking,
        m("contact.title"),
        m("contact.name"),
        m("contact.email"),
        m("contact.subject"),
        m("contact.message"),
        m("contact.send"),
        m("contact.sent"),
        m("contact.failed"),
        l = locale.as_str(),
    );

    html(layout(locale, &m("hero.title"), &body))
}

async fn dashboard(config: web::Data<AppConfig>, path: web::Path<String>) -> HttpResponse {
    let locale = effective_locale(&config, &path.into_inner());
    let m = |key: &str| message(locale, key);

    let body = format!(
        "<h1>{}</h1>\
         <section><h2>{}</h2><ul id=\"resources\"><li>{}</li></ul></section>\
         <section><h2>{}</h2><ul id=\"feedback\"><li>{}</li></ul></section>\
         <script>\
         async function load(url, listId, empty, render) {{\
           const resp = await fetch(url);\
           if (!resp.ok) return;\
           const data = await resp.json();\
           const list = document.getElementById(listId);\
           list.innerHTML = '';\
           const items = data.resources || data.feedback || [];\
           if (!items.length) {{ list.innerHTML = '<li>' + empty + '</li>'; return; }}\
           for (const item of items) {{ list.appendChild(render(item)); }}\
         }}\
         load('/api/resources', 'resources', '{}', (r) => {{\
           const li = document.createElement('li');\
           const a = document.createElement('a');\
           a.href = '/api/resources/' + r.id;\
           a.textContent = r.filename;\
           li.appendChild(a);\
           return li;\
         }});\
         load('/api/feedback', 'feedback', '{}', (f) => {{\
           const li = document.createElement('li');\
           li.textContent = f.content;\
           return li;\
         }});\
         </script>",
        m("dashboard.title"),
        m("dashboard.resources"),
        m("dashboard.resourcesEmpty"),
        m("dashboard.feedback"),
        m("dashboard.feedbackEmpty"),
        m("dashboard.resourcesEmpty"),
        m("dashboard.feedbackEmpty"),
    );

    html(layout(locale, &m("dashboard.title"), &body))
}

async fn sign_in(config: web::Data<AppConfig>, path: web::Path<String>) -> HttpResponse {
    let locale = effective_locale(&config, &path.into_inner());
    let m = |key: &str| message(locale, key);

    let body = format!("<h1>{}</h1><p>{}</p>", m("signIn.title"), m("signIn.prompt"));
    html(layout(locale, &m("signIn.title"), &body))
}
