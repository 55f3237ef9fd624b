use super::{print_empty, print_heading, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;
use confdash_index::best_effort;
use confdash_types::{InstanceId, Session};

pub fn handle(ctx: &ExecutionContext, instance_id: i64) -> Result<()> {
    let repo = ctx.db()?.conference_instances();
    let instance_id = InstanceId::new(instance_id);
    let sessions = best_effort("sessions", repo.get_sessions_by_instance(instance_id));

    if ctx.is_json() {
        return print_json(&sessions);
    }

    print_heading(&format!("Sessions of instance {}", instance_id));
    if sessions.is_empty() {
        print_empty("No sessions found");
    }
    for session in &sessions {
        print_session(session);
    }

    Ok(())
}

fn print_session(session: &Session) {
    let when = session.starts_at.as_deref().unwrap_or("--");
    match &session.track {
        Some(track) => println!("{}  {} [{}]", when, session.title, track),
        None => println!("{}  {}", when, session.title),
    }

    if let Some(room) = &session.room {
        println!("    room: {}", room);
    }
    for speaker in &session.speakers {
        match &speaker.affiliation {
            Some(affiliation) => println!("    - {} ({})", speaker.name, affiliation),
            None => println!("    - {}", speaker.name),
        }
    }
}
