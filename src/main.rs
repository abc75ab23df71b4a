use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use recetario::{
    render_row, AppConfig, AppError, HttpImageLoader, ImageLoader, NoopImageLoader, RecipeScreen,
    TerminalToast, BANNER,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    env_logger::init();

    let config = AppConfig::load()?;

    let loader: Box<dyn ImageLoader> = if config.images.enabled {
        Box::new(HttpImageLoader::new(
            Duration::from_secs(config.timeout),
            &config.user_agent,
        ))
    } else {
        Box::new(NoopImageLoader)
    };

    let mut screen = RecipeScreen::new(Arc::new(TerminalToast));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("=== {BANNER} ===");

    loop {
        render_screen(&screen, loader.as_ref()).await;
        if screen.recipes().is_empty() {
            print!("[a] Agregar a la lista  [q] salir > ");
        } else {
            print!(
                "[a] Agregar a la lista  [1-{}] eliminar  [q] salir > ",
                screen.recipes().len()
            );
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;

        match input.trim() {
            "a" => {
                screen.set_title(prompt(&mut lines, "Nombre de la receta:", screen.title_input())?);
                screen.set_image_url(prompt(&mut lines, "URL:", screen.image_url_input())?);
                screen.submit();
            }
            "q" => break,
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => screen.tap(n - 1),
                _ => println!("Comando no reconocido"),
            },
        }
    }

    Ok(())
}

async fn render_screen(screen: &RecipeScreen, loader: &dyn ImageLoader) {
    let rows = screen.rows();
    if rows.is_empty() {
        println!("(lista vacía)");
        return;
    }
    for (i, row) in rows.iter().enumerate() {
        println!("{:>2}. {}", i + 1, render_row(row, loader).await);
    }
}

/// Read one field value; an empty line keeps the field's current value,
/// so inputs retained after a rejected submit stay in place.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    current: &str,
) -> Result<String, AppError> {
    if current.is_empty() {
        print!("{label} ");
    } else {
        print!("{label} [{current}] ");
    }
    io::stdout().flush()?;

    let value = match lines.next() {
        Some(line) => line?,
        None => String::new(),
    };
    let value = value.trim();

    if value.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(value.to_string())
    }
}
