use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use matvec::{Matrix2D, Vector};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "matvec-cli")]
#[command(about = "Evaluate matrix and vector operations from the command line")]
struct Cmd {
    /// Show library debug events on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Matrices are written row by row: `"1,2;3,4"` is [[1, 2], [3, 4]].
#[derive(Subcommand)]
enum Action {
    /// Determinant of a square matrix
    Det {
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },
    /// Inverse (adjugate / determinant); singular input prints inf/NaN entries
    Inverse {
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },
    /// Transposed matrix
    Transpose {
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },
    /// Matrix of cofactors
    Cofactor {
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },
    /// Sum of the main diagonal
    Trace {
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },
    /// Matrix product LEFT · RIGHT
    Mul {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Vector operations; vectors are written `"x,y"` or `"x,y,z"`
    #[command(subcommand)]
    Vec(VecAction),
}

#[derive(Subcommand)]
enum VecAction {
    /// Cross product A × B
    Cross {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Dot product A · B
    Dot {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Angle between A and B in radians
    Angle {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Unit vector in the direction of V
    Unit {
        #[arg(allow_hyphen_values = true)]
        v: String,
    },
    /// Euclidean norm of V
    Magnitude {
        #[arg(allow_hyphen_values = true)]
        v: String,
    },
    /// Projection of A onto the direction of B
    Project {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Use |A| cos(THETA) as the projected length
        #[arg(long, allow_hyphen_values = true)]
        theta: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let out = execute(cmd.action)?;
    print!("{out}");
    Ok(())
}

fn execute(action: Action) -> Result<String> {
    match action {
        Action::Det { matrix } => {
            let a = parse_matrix(&matrix)?;
            tracing::info!(rows = a.rows(), cols = a.cols(), "det");
            Ok(format!("{}\n", a.determinant()?))
        }
        Action::Inverse { matrix } => {
            let a = parse_matrix(&matrix)?;
            tracing::info!(rows = a.rows(), cols = a.cols(), "inverse");
            if !a.has_inverse()? {
                tracing::warn!("matrix is singular; entries will not be finite");
            }
            Ok(a.inverse()?.print_matrix())
        }
        Action::Transpose { matrix } => {
            let mut a = parse_matrix(&matrix)?;
            tracing::info!(rows = a.rows(), cols = a.cols(), "transpose");
            a.transpose();
            Ok(a.print_matrix())
        }
        Action::Cofactor { matrix } => {
            let a = parse_matrix(&matrix)?;
            tracing::info!(rows = a.rows(), cols = a.cols(), "cofactor");
            Ok(a.cofactor_matrix()?.print_matrix())
        }
        Action::Trace { matrix } => {
            let a = parse_matrix(&matrix)?;
            tracing::info!(rows = a.rows(), cols = a.cols(), "trace");
            Ok(format!("{}\n", a.trace()?))
        }
        Action::Mul { left, right } => {
            let a = parse_matrix(&left)?;
            let b = parse_matrix(&right)?;
            tracing::info!(left = ?a.shape(), right = ?b.shape(), "mul");
            Ok(Matrix2D::matmul(&a, &b)?.print_matrix())
        }
        Action::Vec(op) => execute_vec(op),
    }
}

fn execute_vec(op: VecAction) -> Result<String> {
    let out = match op {
        VecAction::Cross { a, b } => parse_vector(&a)?.cross(&parse_vector(&b)?).to_string(),
        VecAction::Dot { a, b } => Vector::dot(&parse_vector(&a)?, &parse_vector(&b)?).to_string(),
        VecAction::Angle { a, b } => {
            Vector::angle(&parse_vector(&a)?, &parse_vector(&b)?).to_string()
        }
        VecAction::Unit { v } => {
            let v = parse_vector(&v)?;
            if v.magnitude() == 0.0 {
                tracing::warn!("zero vector has no direction; components will be NaN");
            }
            v.unit().to_string()
        }
        VecAction::Magnitude { v } => parse_vector(&v)?.magnitude().to_string(),
        VecAction::Project { a, b, theta } => parse_vector(&a)?
            .vector_projection(&parse_vector(&b)?, theta)
            .to_string(),
    };
    tracing::debug!(out, "vec");
    Ok(out + "\n")
}

/// Parse `"1,2;3,4"` (rows split by `;`, entries by `,`) into a matrix.
fn parse_matrix(s: &str) -> Result<Matrix2D> {
    let mut items = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0;
    for (r, row) in s.split(';').map(str::trim).enumerate() {
        if row.is_empty() {
            continue;
        }
        let parsed = parse_numbers(row).with_context(|| format!("parsing matrix row {}", r + 1))?;
        match cols {
            None => cols = Some(parsed.len()),
            Some(n) if n != parsed.len() => {
                bail!("row {} has {} entries, expected {}", r + 1, parsed.len(), n)
            }
            Some(_) => {}
        }
        items.extend(parsed);
        rows += 1;
    }
    let Some(cols) = cols else {
        bail!("empty matrix: {s:?}");
    };
    Ok(Matrix2D::from_array(items, rows, cols)?)
}

/// Parse `"x,y"` or `"x,y,z"`.
fn parse_vector(s: &str) -> Result<Vector> {
    let c = parse_numbers(s).with_context(|| format!("parsing vector {s:?}"))?;
    match c.as_slice() {
        [x, y] => Ok(Vector::new_2d(*x, *y)),
        [x, y, z] => Ok(Vector::new(*x, *y, *z)),
        _ => bail!("vector needs 2 or 3 components, got {}", c.len()),
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            let t = t.trim();
            t.parse::<f64>()
                .with_context(|| format!("invalid number {t:?}"))
        })
        .collect()
}
