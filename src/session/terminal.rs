use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{game::GameEngine, models::GameSnapshot};

pub const SKIP_COMMAND: &str = ":skip";
pub const QUIT_COMMAND: &str = ":quit";

const INSTRUCTIONS: &str = "Unscramble the word using all the letters.";

/// Draw the game screen for a snapshot
pub fn render(snapshot: &GameSnapshot) -> String {
    let prompt = if snapshot.is_guess_wrong {
        format!("Wrong Guess! ({})", snapshot.current_guess.trim())
    } else {
        "Enter your word".to_string()
    };

    format!(
        "\nUnscramble{:>24}\n[{}/{}]\n\n    {}\n\n{}\n{} ({} / {})\n",
        format!("Score: {}", snapshot.score),
        snapshot.word_count,
        snapshot.max_words,
        snapshot.current_scramble,
        INSTRUCTIONS,
        prompt,
        SKIP_COMMAND,
        QUIT_COMMAND,
    )
}

/// Draw the end-of-round dialog
pub fn render_final(snapshot: &GameSnapshot) -> String {
    format!(
        "\nCongratulations!\nYou scored: {}\nPlay again? [y/N]\n",
        snapshot.score
    )
}

/// Interactive play over a line-based terminal.
///
/// Plain lines are guesses. Returns when the player quits, declines another
/// round, or input ends.
pub async fn run<R, W>(engine: &mut GameEngine, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        let snapshot = engine.snapshot();

        if snapshot.is_game_over {
            write(&mut output, &render_final(&snapshot)).await?;
            let Some(answer) = lines.next_line().await.context("failed to read input")? else {
                break;
            };
            if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                engine.reset_game();
                continue;
            }
            break;
        }

        write(&mut output, &render(&snapshot)).await?;
        write(&mut output, "> ").await?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };

        match line.trim() {
            QUIT_COMMAND => break,
            SKIP_COMMAND => engine.skip_word(),
            _ => {
                engine.update_guess(line);
                engine.check_guess();
            }
        }
    }

    tracing::info!("Player left with score {}", engine.snapshot().score);
    Ok(())
}

async fn write<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
