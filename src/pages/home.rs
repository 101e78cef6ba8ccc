use chrono::Datelike;
use yew::prelude::*;

use crate::behavior::reveal::{use_reveal, ABOUT_BOXES, CONTENT_FADE, SKILL_CARDS};
use crate::components::anchor_link::AnchorLink;
use crate::components::contact_form::ContactFormView;
use crate::components::marquee::Marquee;
use crate::components::nav::Nav;
use crate::config;
use crate::content::{self, PROJECTS, SKILLS, TIMELINE};

#[function_component(Home)]
pub fn home() -> Html {
    use_reveal(CONTENT_FADE);
    use_reveal(SKILL_CARDS);
    use_reveal(ABOUT_BOXES);

    let year = chrono::Local::now().year();

    html! {
        <>
            <Nav />
            <main class="main">
                <section id="home" class="hero section">
                    <div class="hero-content container">
                        <p class="hero-greeting">{"Hi, I'm"}</p>
                        <h1 class="hero-name">{ config::OWNER_NAME }</h1>
                        <h2 class="hero-role">{ config::OWNER_ROLE }</h2>
                        <div class="hero-actions">
                            <AnchorLink href="#projects" class="btn btn-primary">{"See my work"}</AnchorLink>
                            <AnchorLink href="#contact" class="btn btn-outline">{"Get in touch"}</AnchorLink>
                        </div>
                    </div>
                </section>

                <section id="about" class="about section">
                    <h2 class="section-title">{"About Me"}</h2>
                    <div class="about-container container">
                        { for content::ABOUT_BOXES.iter().map(|about| html! {
                            <div class="about-box">
                                <h3>{ about.heading }</h3>
                                <p>{ about.body }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="skills" class="skills section">
                    <h2 class="section-title skills-title">{"Skills"}</h2>
                    <div class="skills-container container">
                        { for SKILLS.iter().map(|skill| html! {
                            <div class="skill-card">
                                <h3>{ skill.name }</h3>
                                <ul>
                                    { for skill.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="projects" class="projects section">
                    <h2 class="section-title">{"Projects"}</h2>
                    <Marquee projects={PROJECTS} />
                </section>

                <section id="experience" class="experience section">
                    <h2 class="section-title">{"Experience"}</h2>
                    <div class="timeline container">
                        { for TIMELINE.iter().map(|item| html! {
                            <div class="timeline-item">
                                <span class="timeline-period">{ item.period }</span>
                                <h3>{ item.role }</h3>
                                <p class="timeline-place">{ item.place }</p>
                                <p>{ item.detail }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="contact" class="contact section">
                    <h2 class="section-title">{"Contact"}</h2>
                    <div class="contact-container container">
                        <div class="contact-info">
                            <p>{"Have a project in mind or just want to say hi? Drop me a message."}</p>
                            <a class="contact-mail" href={config::mailto_link()}>{ config::CONTACT_EMAIL }</a>
                        </div>
                        <ContactFormView />
                    </div>
                </section>
            </main>
            <footer class="footer">
                <p>{ format!("© {} {}", year, config::OWNER_NAME) }</p>
            </footer>
        </>
    }
}
