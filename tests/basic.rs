use otter_ssat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom().expect("atom");

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(CLiteral::new(p, true)));

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p), Some(true));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom().expect("atom"), true);
        let q = CLiteral::new(ctx.fresh_atom().expect("atom"), true);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable));
        assert!(ctx.counters.conflicts > 0);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom().expect("atom"), true);
        let q = CLiteral::new(ctx.fresh_atom().expect("atom"), true);

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p, q]));
        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn duplicates() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom().expect("atom"), true);
        let q = CLiteral::new(ctx.fresh_atom().expect("atom"), true);

        // The duplicated clause behaves as (p ∨ q).
        assert!(ctx.add_clause(vec![p, p, q, q]).is_ok());
        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.clause_db.original_count(), 1);
        assert_eq!(ctx.clause_db.unit_count(), 1);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn tautology_skip() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom().expect("atom"), true);
        let q = CLiteral::new(ctx.fresh_atom().expect("atom"), true);

        assert_eq!(Ok(ClauseOk::Tautology), ctx.add_clause(vec![p, -q, -p]));
    }

    #[test]
    fn empty_clause_closes_the_context() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_atom().expect("atom");

        assert!(ctx.add_clause(Vec::default()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.failed_assumptions().is_empty());
    }
}

mod incremental {
    use super::*;

    #[test]
    fn blocking_enumerates_models() {
        let mut ctx = Context::from_config(Config::default());

        let atoms: Vec<u32> = (0..3).map(|_| ctx.fresh_atom().expect("atom")).collect();

        let mut model_count = 0;
        while let Ok(Report::Satisfiable) = ctx.solve() {
            model_count += 1;

            // To exclude the current valuation, the negation of the current valuation is added as a clause.
            let exclusion: Vec<CLiteral> = atoms
                .iter()
                .map(|&atom| CLiteral::new(atom, !ctx.value_of(atom).expect("value")))
                .collect();

            if ctx.add_clause(exclusion).is_err() {
                break;
            }
        }

        assert_eq!(model_count, 8);
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn solves_with_distinct_assumptions() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom().expect("atom"), true);
        let q = CLiteral::new(ctx.fresh_atom().expect("atom"), true);

        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert_eq!(ctx.solve_given(vec![p]), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(q.atom()), Some(true));

        assert_eq!(ctx.solve_given(vec![-q]), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(false));

        assert_eq!(ctx.solve_given(vec![p, -q]), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.solve_given(vec![p, q]), Ok(Report::Satisfiable));
    }
}
