use clap::{App, Arg};

use crate::scenes::{self, SCENES};

pub fn cli_main() {
    let matches = App::new("hello-gl")
        .about("Incremental OpenGL tutorial scenes, from a raw triangle to a small buffer abstraction")
        .arg(
            Arg::with_name("SCENE")
                .help("Scene to run (defaults to \"triangle\")")
                .index(1),
        )
        .arg(
            Arg::with_name("list")
                .short("l")
                .long("list")
                .help("List the available scenes and exit"),
        )
        .get_matches();

    if matches.is_present("list") {
        for scene in SCENES.iter() {
            println!("{:<14} {}", scene.name, scene.summary);
        }

        return;
    }

    let name = matches.value_of("SCENE").unwrap_or("triangle");

    match scenes::find(name) {
        Some(scene) => (scene.run)(),
        None => {
            eprintln!("unknown scene \"{}\" (try --list)", name);
            std::process::exit(1);
        }
    }
}
