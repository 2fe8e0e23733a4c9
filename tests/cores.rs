use otter_ssat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

mod failed_assumptions {
    use super::*;

    #[test]
    fn direct_failure() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom().expect("atom"), true);
        let q = CLiteral::new(ctx.fresh_atom().expect("atom"), true);

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q]).is_ok());

        let result = ctx.solve_given(vec![p]);

        assert_eq!(result, Ok(Report::Unsatisfiable));
        assert!(ctx.failed_assumptions().contains(&p));
    }

    #[test]
    fn multiple_failures() {
        let mut ctx = Context::from_config(Config::default());

        let literals: Vec<CLiteral> = (0..6)
            .map(|_| CLiteral::new(ctx.fresh_atom().expect("atom"), true))
            .collect();
        let [p, q, r, s, t, u] = literals.as_slice() else {
            panic!("insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, *q]).is_ok());
        assert!(ctx.add_clause(vec![-r, *s]).is_ok());
        assert!(ctx.add_clause(vec![-s, *t]).is_ok());
        assert!(ctx.add_clause(vec![-q, -t]).is_ok());

        let result = ctx.solve_given(vec![*p, *r, *u]);

        assert_eq!(result, Ok(Report::Unsatisfiable));

        assert!(ctx.failed_assumptions().contains(p));
        assert!(ctx.failed_assumptions().contains(r));
        assert!(!ctx.failed_assumptions().contains(u));
    }

    #[test]
    fn failure_against_a_proven_literal() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom().expect("atom"), true);

        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.solve_given(vec![p]), Ok(Report::Unsatisfiable));

        // The assumption fails on its own: the formula proves its negation.
        assert_eq!(ctx.failed_assumptions(), &[p]);

        // The formula itself remains satisfiable.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn cores_reset_between_solves() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom().expect("atom"), true);
        let q = CLiteral::new(ctx.fresh_atom().expect("atom"), true);

        assert!(ctx.add_clause(vec![-p, -q]).is_ok());

        assert_eq!(ctx.solve_given(vec![p, q]), Ok(Report::Unsatisfiable));
        assert!(!ctx.failed_assumptions().is_empty());

        assert_eq!(ctx.solve_given(vec![p]), Ok(Report::Satisfiable));
        assert!(ctx.failed_assumptions().is_empty());
    }
}
