//! Questionnaire page markup.
//!
//! One shell for both questionnaires: identity fields, the vocabulary
//! sections, delivery options and a result modal. The inline script posts
//! the answers as JSON and downloads the returned proposal.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::proposal::request::{FormKind, Lang};
use crate::proposal::vocabulary::{ChoiceGroup, Section, Text, COOPERATION_FORM, MODULES_FORM};

/// Name of the downloaded proposal file.
pub const DOWNLOAD_FILENAME: &str = "propozycja-wspolpracy-diasen.txt";

const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#18181b;--fg:#f4f4f5;--fg2:#a1a1aa;--accent:#f59e0b;--surface:rgba(0,0,0,.35);--border:rgba(255,255,255,.18)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.5;color:var(--fg);background:var(--bg);display:flex;justify-content:center;padding:1.5rem 1rem}
main{max-width:860px;width:100%}
h1{font-size:1.6rem;margin-bottom:.25rem}
h2{font-size:1.1rem;margin-bottom:.25rem}
h3{font-size:.9rem;margin:1rem 0 .5rem;padding:.4rem .75rem;border-radius:8px;background:var(--surface)}
.lead{color:var(--fg2);font-size:.9rem;margin-bottom:1.5rem}
.lang-switch{font-size:.8rem;margin-bottom:1rem}
.lang-switch a{color:var(--accent)}
section{border-top:1px solid var(--border);padding-top:1.25rem;margin-top:1.25rem}
section p.hint{color:var(--fg2);font-size:.8rem}
.grid{display:grid;grid-template-columns:1fr 1fr;gap:.75rem}
label.field{display:block;font-size:.75rem;font-weight:600}
input[type=text],input[type=email],textarea{width:100%;margin-top:.25rem;padding:.5rem .75rem;border-radius:10px;border:1px solid var(--border);background:var(--surface);color:var(--fg)}
textarea{min-height:70px}
.choice{display:flex;gap:.5rem;align-items:flex-start;font-size:.8rem;padding:.4rem .75rem;margin-bottom:.35rem;border:1px solid var(--border);border-radius:8px;background:var(--surface);cursor:pointer}
.choice small{display:block;color:var(--fg2)}
.actions{border-top:1px solid var(--border);margin-top:1.5rem;padding-top:1rem;display:flex;justify-content:space-between;align-items:center;gap:1rem}
button{border:none;border-radius:999px;padding:.6rem 1.25rem;font-weight:600;cursor:pointer}
button.primary{background:linear-gradient(45deg,#f59e0b,#fde047);color:#000}
button.secondary{background:rgba(255,255,255,.1);color:var(--fg);border:1px solid var(--border)}
button:disabled{opacity:.6;cursor:not-allowed}
.modal{display:none;position:fixed;inset:0;background:rgba(0,0,0,.6);align-items:center;justify-content:center;padding:1rem}
.modal.open{display:flex}
.modal-card{background:#0c0c0e;border:1px solid var(--border);border-radius:18px;max-width:860px;width:100%;max-height:90vh;display:flex;flex-direction:column}
.modal-card header,.modal-card footer{padding:1rem 1.5rem;display:flex;justify-content:space-between;gap:1rem;align-items:center}
.modal-card pre{padding:1rem 1.5rem;overflow:auto;white-space:pre-wrap;font-size:.8rem;flex:1}
.error{color:#f87171;font-size:.85rem}
"#;

const PAGE_SCRIPT: &str = r#"
(function () {
  const form = document.getElementById('proposal-form');
  const listFields = form.dataset.listFields.split(',').filter(Boolean);
  const modal = document.getElementById('result-modal');
  const output = document.getElementById('result-text');
  const errorBox = document.getElementById('form-error');
  const submit = form.querySelector('button[type=submit]');
  let lastSummary = '';

  function download(text) {
    const blob = new Blob([text], { type: 'text/plain;charset=utf-8' });
    const url = URL.createObjectURL(blob);
    const a = document.createElement('a');
    a.href = url;
    a.download = form.dataset.filename;
    document.body.appendChild(a);
    a.click();
    document.body.removeChild(a);
    URL.revokeObjectURL(url);
  }

  function collect() {
    const data = new FormData(form);
    const payload = {};
    for (const [key, value] of data.entries()) {
      if (!listFields.includes(key)) payload[key] = value;
    }
    for (const field of listFields) payload[field] = data.getAll(field);
    payload.sendEmail = data.get('sendEmail') === 'on';
    if (data.has('intensity')) payload.intensity = parseInt(data.get('intensity'), 10);
    return payload;
  }

  form.addEventListener('submit', async function (event) {
    event.preventDefault();
    errorBox.textContent = '';
    submit.disabled = true;
    try {
      const res = await fetch(form.dataset.endpoint, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(collect())
      });
      const body = await res.json();
      if (!res.ok) {
        errorBox.textContent = body.error || res.statusText;
        return;
      }
      lastSummary = body.summary || '';
      output.textContent = lastSummary + (body.emailMessage ? '\n\n' + body.emailMessage : '');
      modal.classList.add('open');
      download(lastSummary);
    } catch (err) {
      errorBox.textContent = form.dataset.connectionError;
    } finally {
      submit.disabled = false;
    }
  });

  document.getElementById('download-again').addEventListener('click', function () {
    download(lastSummary);
  });
  document.getElementById('close-modal').addEventListener('click', function () {
    modal.classList.remove('open');
  });

  const intensity = form.querySelector('input[name=intensity]');
  if (intensity) {
    const label = document.getElementById('intensity-value');
    intensity.addEventListener('input', function () { label.textContent = intensity.value + '%'; });
  }
})();
"#;

const fn t(pl: &'static str, en: &'static str) -> Text {
    Text { pl, en }
}

/// Renders the full questionnaire page for `kind` in `lang`.
pub fn render(kind: FormKind, lang: Lang) -> Markup {
    let (sections, endpoint, path, heading) = match kind {
        FormKind::Cooperation => (
            COOPERATION_FORM,
            "/api/agent",
            "/",
            t(
                "Program współpracy – kreatywno-strategiczny partner",
                "Collaboration Program – Creative-Strategic Partner",
            ),
        ),
        FormKind::Modules => (
            MODULES_FORM,
            "/api/offer",
            "/offer",
            t(
                "Konfiguracja oferty – moduły i budżet",
                "Offer Configuration – modules and budget",
            ),
        ),
    };
    let list_fields = list_fields(sections);
    let html_lang = lang.pick("pl", "en");

    html! {
        (DOCTYPE)
        html lang=(html_lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (heading.get(lang)) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    p class="lang-switch" {
                        a href={ (path) "?lang=pl" } { "Polski" }
                        " · "
                        a href={ (path) "?lang=en" } { "English" }
                    }
                    h1 { (heading.get(lang)) }
                    p class="lead" {
                        (lang.pick(
                            "Wypełnij kilka sekcji, a system automatycznie wygeneruje gotowy tekst oferty i pobierze go jako plik .txt.",
                            "Fill out a few sections and the system will generate a ready proposal text and download it as a .txt file.",
                        ))
                    }

                    form id="proposal-form"
                        data-endpoint=(endpoint)
                        data-filename=(DOWNLOAD_FILENAME)
                        data-list-fields=(list_fields)
                        data-connection-error=(lang.pick(
                            "Wystąpił błąd połączenia z serwerem.",
                            "Could not reach the server.",
                        ))
                    {
                        (identity_fields(kind, lang))

                        @for section in sections {
                            (section_block(section, lang))
                        }

                        @if kind == FormKind::Modules {
                            (budget_fields(lang))
                        }

                        (delivery_fields(lang))

                        div class="actions" {
                            p class="error" id="form-error" {}
                            button type="submit" class="primary" {
                                (lang.pick("Wygeneruj ofertę", "Generate Offer"))
                            }
                        }
                    }
                }

                (result_modal(lang))
                script { (PreEscaped(PAGE_SCRIPT)) }
            }
        }
    }
}

/// Comma-separated JSON field names that post as arrays.
fn list_fields(sections: &[Section]) -> String {
    let mut fields: Vec<&str> = Vec::new();
    for group in sections.iter().flat_map(|s| s.groups.iter()) {
        if group.multiple && !fields.contains(&group.field) {
            fields.push(group.field);
        }
    }
    fields.join(",")
}

fn identity_fields(kind: FormKind, lang: Lang) -> Markup {
    // The module form also requires contact person and e-mail.
    let contact_required = kind == FormKind::Modules;

    html! {
        section {
            div class="grid" {
                label class="field" {
                    (lang.pick("Nazwa firmy / marki *", "Company / Brand name *"))
                    input type="text" name="companyName" required;
                }
                label class="field" {
                    (lang.pick("Osoba kontaktowa", "Contact person"))
                    @if contact_required { " *" }
                    input type="text" name="contactPerson" required[contact_required];
                }
                label class="field" {
                    (lang.pick("Stanowisko", "Position / Role"))
                    input type="text" name="contactRole";
                }
                label class="field" {
                    "E-mail"
                    @if contact_required { " *" }
                    input type="email" name="contactEmail" required[contact_required];
                }
            }
        }
    }
}

fn section_block(section: &Section, lang: Lang) -> Markup {
    html! {
        section {
            h2 { (section.title.get(lang)) }
            p class="hint" { (section.description.get(lang)) }
            @for group in section.groups {
                (group_block(group, lang))
            }
        }
    }
}

fn group_block(group: &ChoiceGroup, lang: Lang) -> Markup {
    let input_type = if group.multiple { "checkbox" } else { "radio" };

    html! {
        h3 { (group.title.get(lang)) }
        @for choice in group.choices {
            label class="choice" {
                input type=(input_type) name=(group.field) value=(choice.id);
                span {
                    (choice.label.get(lang))
                    @if let Some(detail) = &choice.detail {
                        small { (detail.get(lang)) }
                    }
                }
            }
        }
    }
}

fn budget_fields(lang: Lang) -> Markup {
    html! {
        section {
            h2 { (lang.pick("Budżet i intensywność", "Budget and intensity")) }
            div class="grid" {
                label class="field" {
                    (lang.pick("Budżet minimalny", "Minimum budget"))
                    input type="text" name="budgetMin" inputmode="numeric";
                }
                label class="field" {
                    (lang.pick("Budżet maksymalny", "Maximum budget"))
                    input type="text" name="budgetMax" inputmode="numeric";
                }
            }
            label class="field" {
                (lang.pick("Intensywność współpracy", "Collaboration intensity"))
                " "
                span id="intensity-value" { "50%" }
                input type="range" name="intensity" min="0" max="100" step="5" value="50";
            }
        }
    }
}

fn delivery_fields(lang: Lang) -> Markup {
    html! {
        section {
            h2 { (lang.pick("Podsumowanie", "Summary")) }
            label class="field" {
                (lang.pick("Dodatkowe uwagi lub komentarze", "Additional comments or notes"))
                textarea name="additionalNotes"
                    placeholder=(lang.pick(
                        "np. preferencje dotyczące terminów, specjalne wymagania",
                        "e.g. timing preferences, special requirements",
                    )) {}
            }
            p class="hint" { (lang.pick("Język propozycji", "Proposal language")) }
            label class="choice" {
                input type="radio" name="languageMode" value="pl" checked;
                span { (lang.pick("Polski", "Polish")) }
            }
            label class="choice" {
                input type="radio" name="languageMode" value="en";
                span { (lang.pick("Angielski", "English")) }
            }
            label class="choice" {
                input type="radio" name="languageMode" value="both";
                span { (lang.pick("Polski + angielski", "Polish + English")) }
            }
            label class="choice" {
                input type="checkbox" name="sendEmail";
                span { (lang.pick("Wyślij propozycję emailem", "Send proposal by email")) }
            }
            label class="field" {
                (lang.pick("Dodatkowy adres email (opcjonalnie)", "Additional email address (optional)"))
                input type="email" name="emailToSend";
            }
        }
    }
}

fn result_modal(lang: Lang) -> Markup {
    html! {
        div class="modal" id="result-modal" {
            div class="modal-card" {
                header {
                    strong { (lang.pick("Propozycja Współpracy", "Cooperation Proposal")) }
                    small {
                        (lang.pick(
                            "Propozycja została automatycznie pobrana jako plik tekstowy",
                            "Proposal has been automatically downloaded as a text file",
                        ))
                    }
                }
                pre id="result-text" {}
                footer {
                    button type="button" class="secondary" id="download-again" {
                        (lang.pick("Pobierz ponownie", "Download again"))
                    }
                    button type="button" class="primary" id="close-modal" {
                        (lang.pick("Zamknij", "Close"))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooperation_page_lists_every_choice() {
        let page = render(FormKind::Cooperation, Lang::Pl).into_string();

        assert!(page.contains(r#"data-endpoint="/api/agent""#));
        assert!(page.contains(DOWNLOAD_FILENAME));
        for choice in COOPERATION_FORM
            .iter()
            .flat_map(|s| s.groups.iter())
            .flat_map(|g| g.choices.iter())
        {
            assert!(page.contains(&format!(r#"value="{}""#, choice.id)), "{}", choice.id);
        }
        assert!(!page.contains(r#"name="intensity""#));
    }

    #[test]
    fn test_module_page_has_budget_and_required_contact() {
        let page = render(FormKind::Modules, Lang::En).into_string();

        assert!(page.contains(r#"data-endpoint="/api/offer""#));
        assert!(page.contains(r#"name="intensity""#));
        assert!(page.contains(r#"name="budgetMin""#));
        assert!(page.contains(r#"type="radio" name="refundMechanism""#));
        assert!(page.contains(r#"name="contactEmail" required"#));
        assert!(page.contains("Generate Offer"));
    }

    #[test]
    fn test_list_fields_skip_single_choice_groups() {
        assert_eq!(
            list_fields(MODULES_FORM),
            "modules,goals,markets,activities"
        );
        let cooperation = list_fields(COOPERATION_FORM);
        assert!(cooperation.starts_with("areasOfCooperation,cooperationModel"));
        assert!(cooperation.ends_with("selectedScenarios"));
    }
}
